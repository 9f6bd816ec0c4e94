/// Exit codes of the command line, following the BSD `sysexits` numbers where one fits.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command line arguments error.
    Cli = 64,
    /// Config file error.
    Config = 65,
    /// IO error.
    IO = 66,
    /// General failure.
    Failure = 113,
}

impl ExitCode {
    /// The process exit status.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<std::io::Error> for ExitCode {
    fn from(err: std::io::Error) -> ExitCode {
        eprintln!("IO Error: {err}");
        ExitCode::IO
    }
}

impl From<clap::Error> for ExitCode {
    fn from(err: clap::Error) -> ExitCode {
        eprintln!("Args Error: {err}");
        ExitCode::Cli
    }
}

impl From<explorer_error::Error> for ExitCode {
    fn from(err: explorer_error::Error) -> ExitCode {
        eprintln!("Error: {err}");
        match err.kind() {
            explorer_error::ErrorKind::Config => ExitCode::Config,
            _ => ExitCode::Failure,
        }
    }
}
