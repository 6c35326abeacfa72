use crate::arch::machine::Machine;
use std::error::Error;
use std::fmt;
use std::io;

#[cfg(unix)]
use std::ffi::CStr;
#[cfg(unix)]
use std::mem::MaybeUninit;

/// The system-information query failed.
///
/// Wraps the OS error reported by the query facility. There is no retry:
/// detection either succeeds on the single call or fails with this.
#[derive(Debug)]
pub struct QueryError(io::Error);

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uname system call failed: {}", self.0)
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<io::Error> for QueryError {
    fn from(err: io::Error) -> Self {
        QueryError(err)
    }
}

/// The identity strings reported by `uname(2)`.
#[cfg(unix)]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UtsName {
    /// Operating system name, e.g. `Linux` or `Darwin`.
    pub sysname: String,
    /// Network node hostname.
    pub nodename: String,
    /// Operating system release.
    pub release: String,
    /// Operating system version.
    pub version: String,
    /// Hardware identifier, e.g. `x86_64` or `arm64`.
    pub machine: String,
}

#[cfg(unix)]
fn uname_raw() -> io::Result<libc::utsname> {
    let mut utsname = MaybeUninit::zeroed();
    let r = unsafe { libc::uname(utsname.as_mut_ptr()) };
    if r != 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(unsafe { utsname.assume_init() })
}

#[cfg(unix)]
fn decode_field(field: &[libc::c_char]) -> String {
    let field = unsafe { CStr::from_ptr(field.as_ptr()) };
    field.to_string_lossy().into_owned()
}

/// Queries `uname(2)` and decodes every field of the result.
#[cfg(unix)]
pub fn uname() -> Result<UtsName, QueryError> {
    let utsname = uname_raw()?;
    Ok(UtsName {
        sysname: decode_field(&utsname.sysname),
        nodename: decode_field(&utsname.nodename),
        release: decode_field(&utsname.release),
        version: decode_field(&utsname.version),
        machine: decode_field(&utsname.machine),
    })
}

// Rosetta 2 translates the machine identifier uname reports, so an x86_64
// answer on macOS may describe an emulated machine. The sysctl only exists
// on hosts that can translate.
#[cfg(target_os = "macos")]
fn proc_translated() -> bool {
    use sysctl::Sysctl;

    sysctl::Ctl::new("sysctl.proc_translated")
        .and_then(|ctl| ctl.value())
        .map(|value| matches!(value, sysctl::CtlValue::Int(1)))
        .unwrap_or(false)
}

/// Detects the architecture of the host machine and returns it.
///
/// On Unix targets the answer comes from `uname(2)`; elsewhere it falls back
/// to the architecture this binary was compiled for, which cannot fail.
pub fn host() -> Result<Machine, QueryError> {
    cfg_if::cfg_if! {
        if #[cfg(target_os = "macos")] {
            let utsname = uname()?;
            let mut machine = Machine::from_reported(&utsname.machine);
            machine.translated = proc_translated();
            Ok(machine)
        } else if #[cfg(unix)] {
            let utsname = uname()?;
            Ok(Machine::from_reported(&utsname.machine))
        } else {
            Ok(Machine::from_reported(std::env::consts::ARCH))
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_host() {
        let host = super::host();
        eprintln!("{:#?}", &host);
        let machine = host.expect("host() should detect the current machine");
        assert!(!machine.reported().is_empty());
    }

    #[test]
    fn host_is_idempotent() {
        let first = super::host().unwrap();
        let second = super::host().unwrap();
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn uname_fields_are_populated() {
        let utsname = super::uname().unwrap();
        assert!(!utsname.sysname.is_empty());
        assert!(!utsname.machine.is_empty());
    }
}
