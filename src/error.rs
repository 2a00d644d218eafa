use std::fmt;

#[derive(Debug)]
pub enum UnzipError {
    CantOpenArchive(std::io::Error),
    Archive(zip::result::ZipError),
    FilenameDecode(Vec<u8>),
    CantOpenDestFile(std::io::Error),
    PathTraversal(String),
    Io(std::io::Error),
}

impl fmt::Display for UnzipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CantOpenArchive(e) => write!(f, "can't open archive file: {e}"),
            Self::Archive(e) => write!(f, "archive error: {e}"),
            Self::FilenameDecode(bytes) => {
                write!(f, "can't decode file name:")?;
                for b in bytes {
                    write!(f, " {b:02x}")?;
                }
                Ok(())
            }
            Self::CantOpenDestFile(e) => write!(f, "can't open dest file: {e}"),
            Self::PathTraversal(p) => write!(f, "path traversal blocked: {p}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UnzipError {}

impl From<std::io::Error> for UnzipError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<zip::result::ZipError> for UnzipError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e)
    }
}

pub type UnzipResult<T> = Result<T, UnzipError>;
