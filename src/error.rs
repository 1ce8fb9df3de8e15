/// Error type for the icon conversion
///
/// Every variant carries the path it failed on so the message printed
/// when the process exits is enough to find the offending file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    /// Opening or decoding an image failed (missing file included)
    #[error("failed to open image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Writing the converted PNG failed
    #[error("failed to save image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input path has no file name to derive an output name from
    #[error("not an image file path: {}", .0.display())]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = IconError::Remove {
            path: PathBuf::from("128x128@2x.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("128x128@2x.png"));
        assert!(msg.contains("denied"));

        let err = IconError::InvalidPath(PathBuf::from("/"));
        assert_eq!(err.to_string(), "not an image file path: /");
    }
}
