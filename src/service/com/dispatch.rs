use std::io;
use std::mem::ManuallyDrop;
use std::os::windows::ffi::OsStrExt;
use std::path::{self, Path};
use std::ptr;
use log::debug;
use windows::core::{Interface, BSTR, GUID, HSTRING, IUnknown, PCWSTR, VARIANT};
use windows::Win32::System::Com::{
    CLSIDFromProgID, CoCreateInstance, CoInitializeEx, CoUninitialize, IDispatch, CLSCTX_LOCAL_SERVER,
    COINIT_APARTMENTTHREADED, DISPATCH_FLAGS, DISPATCH_METHOD, DISPATCH_PROPERTYGET, DISPATCH_PROPERTYPUT,
    DISPPARAMS, EXCEPINFO,
};
use windows::Win32::Foundation::DISP_E_EXCEPTION;
use windows::Win32::System::Ole::DISPID_PROPERTYPUT;
use windows::Win32::System::Variant::{VariantChangeType, VAR_CHANGE_FLAGS, VT_UNKNOWN};
use crate::models::document::HostKind;
use crate::service::com::{exception_message, PP_SAVE_AS_PDF, WD_FORMAT_PDF};
use crate::service::traits::i_automation::{AutomationHost, AutomationRuntime};

const LOCALE_USER_DEFAULT: u32 = 0x0400;

fn com_error(member: &str, e: windows::core::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{} failed: {}", member, e))
}

/// 目前執行緒上的 COM 單執行緒套間，丟棄時呼叫 `CoUninitialize`
pub struct ComRuntime {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ComRuntime {
    pub fn initialize() -> io::Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| com_error("CoInitializeEx", e))?;
        debug!("COM initialized");
        Ok(ComRuntime { _not_send: std::marker::PhantomData })
    }
}

impl Drop for ComRuntime {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        debug!("COM uninitialized");
    }
}

impl AutomationRuntime for ComRuntime {
    type Host = ComHost;

    fn launch(&self, kind: HostKind) -> io::Result<ComHost> {
        let prog_id = match kind {
            HostKind::WordProcessor => "Word.Application",
            HostKind::Presentation => "PowerPoint.Application",
        };
        let clsid = unsafe { CLSIDFromProgID(&HSTRING::from(prog_id)) }.map_err(|e| com_error(prog_id, e))?;
        let app: IDispatch =
            unsafe { CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER) }.map_err(|e| com_error(prog_id, e))?;
        Ok(ComHost { kind, app: Dispatch(app), documents: None })
    }
}

/// 以名稱呼叫 `IDispatch` 成員的薄包裝
#[derive(Clone)]
pub struct Dispatch(IDispatch);

impl Dispatch {
    fn dispid(&self, name: &str) -> io::Result<i32> {
        let wide = HSTRING::from(name);
        let names = [PCWSTR(wide.as_ptr())];
        let mut dispid = 0i32;
        unsafe {
            self.0
                .GetIDsOfNames(&GUID::zeroed(), names.as_ptr(), 1, LOCALE_USER_DEFAULT, &mut dispid)
        }
        .map_err(|e| com_error(name, e))?;
        Ok(dispid)
    }

    fn invoke(&self, name: &str, flags: DISPATCH_FLAGS, args: &[VARIANT]) -> io::Result<VARIANT> {
        let dispid = self.dispid(name)?;
        // IDispatch 以反向順序接收參數
        let mut args: Vec<VARIANT> = args.iter().rev().cloned().collect();
        let mut named = DISPID_PROPERTYPUT;
        let is_put = flags == DISPATCH_PROPERTYPUT;
        let params = DISPPARAMS {
            rgvarg: if args.is_empty() { ptr::null_mut() } else { args.as_mut_ptr() },
            rgdispidNamedArgs: if is_put { &mut named } else { ptr::null_mut() },
            cArgs: args.len() as u32,
            cNamedArgs: if is_put { 1 } else { 0 },
        };
        let mut result = VARIANT::default();
        let mut excepinfo = EXCEPINFO::default();
        let outcome = unsafe {
            self.0.Invoke(
                dispid,
                &GUID::zeroed(),
                LOCALE_USER_DEFAULT,
                flags,
                &params,
                Some(&mut result as *mut VARIANT),
                Some(&mut excepinfo as *mut EXCEPINFO),
                None,
            )
        };
        match outcome {
            Ok(()) => Ok(result),
            Err(e) if e.code() == DISP_E_EXCEPTION => Err(exception_error(name, &mut excepinfo, &e)),
            Err(e) => Err(com_error(name, e)),
        }
    }

    fn call(&self, name: &str, args: &[VARIANT]) -> io::Result<VARIANT> {
        self.invoke(name, DISPATCH_METHOD | DISPATCH_PROPERTYGET, args)
    }

    fn call_object(&self, name: &str, args: &[VARIANT]) -> io::Result<Dispatch> {
        let value = self.call(name, args)?;
        let dispatch = object_from_variant(&value).map_err(|e| com_error(name, e))?;
        Ok(Dispatch(dispatch))
    }

    fn get_object(&self, name: &str) -> io::Result<Dispatch> {
        self.call_object(name, &[])
    }

    fn put(&self, name: &str, value: VARIANT) -> io::Result<()> {
        self.invoke(name, DISPATCH_PROPERTYPUT, &[value]).map(|_| ())
    }
}

/// Office 的物件成員回傳 `VT_DISPATCH`，先轉成 `VT_UNKNOWN` 再取得介面
fn object_from_variant(value: &VARIANT) -> windows::core::Result<IDispatch> {
    let mut unknown = VARIANT::default();
    unsafe { VariantChangeType(&mut unknown, value, VAR_CHANGE_FLAGS(0), VT_UNKNOWN) }?;
    IUnknown::try_from(&unknown)?.cast::<IDispatch>()
}

/// 取出 `DISP_E_EXCEPTION` 附帶的來源與說明
fn exception_error(member: &str, excepinfo: &mut EXCEPINFO, e: &windows::core::Error) -> io::Error {
    if let Some(fill) = excepinfo.pfnDeferredFillIn {
        let _ = unsafe { fill(excepinfo) };
    }
    let source = unsafe { ManuallyDrop::take(&mut excepinfo.bstrSource) };
    let description = unsafe { ManuallyDrop::take(&mut excepinfo.bstrDescription) };
    let help_file = unsafe { ManuallyDrop::take(&mut excepinfo.bstrHelpFile) };
    drop(help_file);
    io::Error::new(
        io::ErrorKind::Other,
        exception_message(member, &source.to_string(), &description.to_string(), &e.message()),
    )
}

fn path_variant(path: &Path) -> io::Result<VARIANT> {
    // Office 以自身的工作目錄解析相對路徑
    let absolute = path::absolute(path)?;
    let wide: Vec<u16> = absolute.as_os_str().encode_wide().collect();
    let bstr = BSTR::from_wide(&wide).map_err(|e| com_error("SysAllocStringLen", e))?;
    Ok(VARIANT::from(bstr))
}

/// 單一 Office 應用程式實例及其文件集合
pub struct ComHost {
    kind: HostKind,
    app: Dispatch,
    documents: Option<Dispatch>,
}

impl ComHost {
    fn documents(&self) -> io::Result<&Dispatch> {
        self.documents.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::Other, format!("{} document collection is not attached", self.kind.name()))
        })
    }
}

impl AutomationHost for ComHost {
    type Document = Dispatch;

    fn kind(&self) -> HostKind {
        self.kind
    }

    fn set_visible(&mut self, visible: bool) -> io::Result<()> {
        self.app.put("Visible", VARIANT::from(visible))
    }

    fn attach_documents(&mut self) -> io::Result<()> {
        let collection = match self.kind {
            HostKind::WordProcessor => "Documents",
            HostKind::Presentation => "Presentations",
        };
        self.documents = Some(self.app.get_object(collection)?);
        Ok(())
    }

    fn open(&mut self, path: &Path) -> io::Result<Dispatch> {
        let source = path_variant(path)?;
        let documents = self.documents()?;
        match self.kind {
            HostKind::WordProcessor => documents.call_object("Open", &[source]),
            // ReadOnly, Untitled, WithWindow
            HostKind::Presentation => documents.call_object(
                "Open",
                &[source, VARIANT::from(true), VARIANT::from(true), VARIANT::from(false)],
            ),
        }
    }

    fn save_as_pdf(&mut self, document: &Dispatch, destination: &Path) -> io::Result<()> {
        let format = match self.kind {
            HostKind::WordProcessor => WD_FORMAT_PDF,
            HostKind::Presentation => PP_SAVE_AS_PDF,
        };
        document.call("SaveAs", &[path_variant(destination)?, VARIANT::from(format)])?;
        Ok(())
    }

    fn close(&mut self, document: Dispatch) -> io::Result<()> {
        match self.kind {
            // SaveChanges = wdDoNotSaveChanges
            HostKind::WordProcessor => document.call("Close", &[VARIANT::from(false)])?,
            HostKind::Presentation => document.call("Close", &[])?,
        };
        Ok(())
    }

    fn release_documents(&mut self) {
        self.documents = None;
    }

    fn quit(&mut self) -> io::Result<()> {
        self.app.call("Quit", &[])?;
        Ok(())
    }
}
