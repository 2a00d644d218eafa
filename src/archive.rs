use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::codepage;
use crate::error::{UnzipError, UnzipResult};

/// One member record, scanned from the central directory.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    pub index: usize,
    pub stored_name: String,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub modified: Option<zip::DateTime>,
}

impl ZipEntry {
    /// Directory members carry a trailing separator in their stored name.
    pub fn is_directory(&self) -> bool {
        self.stored_name.ends_with('/')
    }
}

/// An opened ZIP container plus the password used for encrypted members.
pub struct JpArchive {
    zip: ZipArchive<File>,
    pub entries: Vec<ZipEntry>,
    password: Option<Vec<u8>>,
}

impl JpArchive {
    /// Open an archive and scan its member records.
    ///
    /// The password, if any, is re-encoded to CP850 the way DOS-era
    /// archivers expect it, substituting unencodable characters.
    pub fn open(path: &Path, password: Option<&str>) -> UnzipResult<Self> {
        let file = File::open(path).map_err(UnzipError::CantOpenArchive)?;
        let mut zip = ZipArchive::new(file)?;

        let mut entries = Vec::with_capacity(zip.len());
        for index in 0..zip.len() {
            let member = zip.by_index_raw(index)?;
            entries.push(ZipEntry {
                index,
                stored_name: member.name().to_string(),
                compressed_size: member.compressed_size(),
                uncompressed_size: member.size(),
                modified: member.last_modified(),
            });
        }

        Ok(JpArchive {
            zip,
            entries,
            password: password.map(codepage::cp850_bytes_lossy),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open one member for reading, decrypting when a password was given.
    pub fn open_entry(&mut self, index: usize) -> UnzipResult<impl Read + '_> {
        let member = match self.password.as_deref() {
            Some(password) => self.zip.by_index_decrypt(index, password)?,
            None => self.zip.by_index(index)?,
        };
        Ok(member)
    }
}
