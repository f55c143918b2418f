use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Maximum size of a chat export we are willing to load: 50MB
pub const MAX_EXPORT_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Open a file for reading, refusing to follow a symlink at the final component on unix
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a regular file.
pub fn safe_open_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    let file = options
        .open(path)
        .with_context(|| format!("Failed to open chat export: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    Ok(file)
}

/// Validates that an open file is within [`MAX_EXPORT_FILE_BYTES`]
///
/// Takes the open handle so the size checked is the size of the file actually read.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is too large.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_EXPORT_FILE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_EXPORT_FILE_BYTES
        );
    }

    Ok(())
}

/// Read a chat export into memory as UTF-8 text
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the size limit, or is not UTF-8.
pub fn read_export_file(path: &Path) -> Result<String> {
    let mut file = safe_open_file(path)?;
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read chat export: {}", path.display()))?;

    String::from_utf8(bytes)
        .with_context(|| format!("Chat export is not valid UTF-8: {}", path.display()))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chat_export_viewer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Downloads/message_1.html");
/// // Returns "~/Downloads/message_1.html" when the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
