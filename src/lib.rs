pub mod service {
    pub mod com;
    pub mod config_service;
    pub mod controller;
    pub mod file;
    pub mod session;

    #[cfg(test)]
    pub(crate) mod mock;

    pub mod traits {
        pub mod i_automation;
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod conversion_facade;

    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod document;
    pub mod file;
}

pub mod utils {
    pub mod utils;
}
