//! Deterministic photo filename derivation.
//!
//! Filenames have the form `id-<id>-<address><ext>` where `<ext>` is the
//! extension of the photo URL's path (leading dot included, empty when the
//! URL has none). Two records with the same id, address, and extension
//! derive the same name and silently overwrite each other; the last writer
//! wins. That is accepted, known behavior.

use std::path::Path;

use url::Url;

use crate::api::House;
use crate::error::{Error, Result};

/// Derive the output filename for a house's photo.
pub fn photo_filename(house: &House) -> Result<String> {
    let ext = photo_extension(&house.photo_url);
    sanitize_filename(&format!("id-{}-{}{}", house.id, house.address, ext))
}

/// Extract the file extension (with leading dot) from a photo URL.
///
/// The URL is parsed first so query strings and fragments never leak into
/// the extension; a relative or unparseable URL falls back to plain path
/// handling.
pub fn photo_extension(photo_url: &str) -> String {
    let path = match Url::parse(photo_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => photo_url.to_string(),
    };

    match Path::new(&path).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext),
        _ => String::new(),
    }
}

/// Sanitize a derived filename.
///
/// Addresses are free text from the API, so path separators and other
/// characters that are unsafe in a filename are replaced with underscores.
/// Spaces and periods are kept as-is; addresses like "123 Main St." are
/// ordinary input and must round-trip. Once separators are replaced the
/// name is a single path component, so only null bytes and dot-only names
/// (which the filesystem would treat as path components) are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized.chars().all(|c| c == '.') {
        return Err(Error::InvalidFilename(format!(
            "Dot-only filename would act as a path component: '{}'",
            sanitized
        )));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_house(id: i64, address: &str, photo_url: &str) -> House {
        House {
            id,
            address: address.to_string(),
            homeowner: "Test Owner".to_string(),
            price: 100_000,
            photo_url: photo_url.to_string(),
        }
    }

    #[test]
    fn test_photo_filename_keeps_spaces() {
        let house = make_house(42, "123 Main St", "https://example.com/photos/house.jpg");
        assert_eq!(photo_filename(&house).unwrap(), "id-42-123 Main St.jpg");
    }

    #[test]
    fn test_photo_filename_no_extension() {
        let house = make_house(7, "9 Elm Rd", "https://example.com/photos/house");
        assert_eq!(photo_filename(&house).unwrap(), "id-7-9 Elm Rd");
    }

    #[test]
    fn test_photo_filename_trailing_period_address() {
        // "St." + ".jpg" puts ".." in the middle of a perfectly valid name
        let house = make_house(42, "123 Main St.", "https://example.com/photos/photo.jpg");
        assert_eq!(photo_filename(&house).unwrap(), "id-42-123 Main St..jpg");
    }

    #[test]
    fn test_photo_filename_sanitizes_separators() {
        let house = make_house(3, "1/2 Baker St", "https://example.com/p.png");
        assert_eq!(photo_filename(&house).unwrap(), "id-3-1_2 Baker St.png");
    }

    #[test]
    fn test_photo_filename_is_deterministic_for_colliding_records() {
        // Same id + address + extension: both records map to the same file.
        let a = make_house(5, "77 Oak Ave", "https://one.example.com/first.jpg");
        let b = make_house(5, "77 Oak Ave", "https://two.example.com/second.jpg");
        assert_eq!(photo_filename(&a).unwrap(), photo_filename(&b).unwrap());
    }

    #[test]
    fn test_photo_extension_ignores_query_string() {
        assert_eq!(
            photo_extension("https://example.com/photos/house.jpg?size=large"),
            ".jpg"
        );
    }

    #[test]
    fn test_photo_extension_relative_url() {
        assert_eq!(photo_extension("photos/house.png"), ".png");
        assert_eq!(photo_extension("photos/house"), "");
    }

    #[test]
    fn test_sanitize_filename_neutralizes_traversal() {
        // separators become underscores, leaving a harmless single component
        assert_eq!(sanitize_filename("../etc/passwd").unwrap(), ".._etc_passwd");
        assert_eq!(sanitize_filename("foo..bar.jpg").unwrap(), "foo..bar.jpg");
    }

    #[test]
    fn test_sanitize_filename_rejects_dot_only_names() {
        assert!(sanitize_filename(".").is_err());
        assert!(sanitize_filename("..").is_err());
    }

    #[test]
    fn test_sanitize_filename_rejects_null_bytes() {
        assert!(sanitize_filename("file\0name.jpg").is_err());
    }

    #[test]
    fn test_sanitize_filename_rejects_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
