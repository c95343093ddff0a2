use bytes::Bytes;

/// A document as it moves through the gateway: name, declared content type,
/// byte length, and the content itself when materialized in memory.
///
/// The object store is the system of record; descriptors live only for the
/// duration of a single request. `content` is populated for uploads and
/// downloads, omitted for listings. When both `content` and `length` are
/// present, `content.len()` equals `length`.
#[derive(Debug, Clone)]
pub struct DocumentDescriptor {
    /// Document name, unique within the store. Doubles as the store key.
    pub name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// Byte count, when known.
    pub length: Option<u64>,
    /// Full document bytes, when materialized.
    pub content: Option<Bytes>,
}

/// Strip any path components from a client-supplied file name.
///
/// Store keys form a flat namespace; a name like `reports/2024/q1.pdf` or
/// `reports\q1.pdf` must not be able to address outside it.
pub fn document_basename(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_plain_name_unchanged() {
        assert_eq!(document_basename("report.pdf"), "report.pdf");
    }

    #[test]
    fn test_basename_strips_unix_path() {
        assert_eq!(document_basename("reports/2024/q1.pdf"), "q1.pdf");
        assert_eq!(document_basename("/etc/passwd"), "passwd");
    }

    #[test]
    fn test_basename_strips_windows_path() {
        assert_eq!(document_basename("C:\\reports\\q1.pdf"), "q1.pdf");
        assert_eq!(document_basename("mixed/style\\name.pdf"), "name.pdf");
    }

    #[test]
    fn test_basename_trailing_separator_yields_empty() {
        assert_eq!(document_basename("reports/"), "");
    }
}
