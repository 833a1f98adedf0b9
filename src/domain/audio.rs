//! Audio value objects

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Webm,
    Wav,
    Mp3,
    Mpeg,
    Ogg,
    Mp4,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Webm => "audio/webm",
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Webm => "webm",
            Self::Wav => "wav",
            Self::Mp3 | Self::Mpeg => "mp3",
            Self::Ogg => "ogg",
            Self::Mp4 => "mp4",
        }
    }

    /// Parse from a Content-Type header value, e.g. "audio/webm;codecs=opus"
    pub fn from_content_type(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim();
        match essence {
            "audio/webm" | "video/webm" => Some(Self::Webm),
            "audio/wav" | "audio/x-wav" => Some(Self::Wav),
            "audio/mp3" => Some(Self::Mp3),
            "audio/mpeg" => Some(Self::Mpeg),
            "audio/ogg" => Some(Self::Ogg),
            "audio/mp4" => Some(Self::Mp4),
            _ => None,
        }
    }

    /// Guess from the extension of a URL path
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next()?;
        match path.rsplit('.').next()? {
            "webm" => Some(Self::Webm),
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            "mp4" | "m4a" => Some(Self::Mp4),
            _ => None,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Webm
    }
}

/// Raw audio bytes retrieved from the caller-supplied URL.
#[derive(Debug, Clone)]
pub struct FetchedAudio {
    pub bytes: Vec<u8>,
    pub mime_type: AudioMimeType,
}

impl FetchedAudio {
    pub fn new(bytes: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { bytes, mime_type }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Fetched audio spooled to a scoped temporary file.
///
/// The backing file is deleted when this value is dropped, whether the
/// provider call succeeded or failed.
#[derive(Debug)]
pub struct SpooledAudio {
    file: NamedTempFile,
    mime_type: AudioMimeType,
}

impl SpooledAudio {
    /// Write fetched audio to a new temporary file
    pub fn spool(audio: &FetchedAudio) -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&audio.bytes)?;
        file.flush()?;
        Ok(Self {
            file,
            mime_type: audio.mime_type,
        })
    }

    /// Path of the temporary file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Upload file name carrying the right extension for the provider
    pub fn file_name(&self) -> String {
        format!("audio.{}", self.mime_type.extension())
    }
}
