//! Car photo upload rules.
//!
//! Files are stored by the API layer under `<storage_root>/uploads/cars/`;
//! the database keeps the path relative to the storage root.

use crate::error::CoreError;

/// Accepted photo extensions (lowercase).
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Default maximum photo size (5 MiB).
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Directory for car photos, relative to the storage root.
pub const CAR_PHOTO_DIR: &str = "uploads/cars";

/// Extract and check the extension of an uploaded file name.
pub fn photo_extension(file_name: &str) -> Result<String, CoreError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported photo format '{file_name}'. Supported: {}",
            PHOTO_EXTENSIONS.join(", ")
        )))
    }
}

pub fn validate_photo_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation("Photo file is empty".into()));
    }
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "Photo is {len} bytes, maximum is {max_bytes}"
        )));
    }
    Ok(())
}

/// Relative storage path for a car photo with the given unique stem.
pub fn car_photo_path(stem: &str, ext: &str) -> String {
    format!("{CAR_PHOTO_DIR}/{stem}.{ext}")
}

/// Public URL of a stored file.
pub fn public_url(relative_path: &str) -> String {
    format!("/{}", relative_path.trim_start_matches('/'))
}

/// Stored paths must stay inside the storage root.
pub fn is_safe_relative_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path.split('/').all(|segment| !segment.is_empty() && segment != "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        assert_eq!(photo_extension("car.JPG").unwrap(), "jpg");
        assert_eq!(photo_extension("front.view.png").unwrap(), "png");
        assert_eq!(photo_extension("anim.gif").unwrap(), "gif");
    }

    #[test]
    fn rejects_unknown_or_missing_extension() {
        assert!(photo_extension("car.bmp").is_err());
        assert!(photo_extension("car").is_err());
    }

    #[test]
    fn size_limits() {
        assert!(validate_photo_size(1, DEFAULT_MAX_PHOTO_BYTES).is_ok());
        assert!(validate_photo_size(DEFAULT_MAX_PHOTO_BYTES, DEFAULT_MAX_PHOTO_BYTES).is_ok());
        assert!(validate_photo_size(DEFAULT_MAX_PHOTO_BYTES + 1, DEFAULT_MAX_PHOTO_BYTES).is_err());
        assert!(validate_photo_size(0, DEFAULT_MAX_PHOTO_BYTES).is_err());
    }

    #[test]
    fn builds_relative_path_and_url() {
        let path = car_photo_path("abc", "png");
        assert_eq!(path, "uploads/cars/abc.png");
        assert_eq!(public_url(&path), "/uploads/cars/abc.png");
    }

    #[test]
    fn rejects_escaping_paths() {
        assert!(is_safe_relative_path("uploads/cars/a.png"));
        assert!(!is_safe_relative_path("../etc/passwd"));
        assert!(!is_safe_relative_path("/etc/passwd"));
        assert!(!is_safe_relative_path("uploads//a.png"));
        assert!(!is_safe_relative_path(""));
    }
}
