//! Error taxonomy for the filesystem core.

/// An inode number, used to annotate [`Error::NotFound`].
pub type InodeNumber = u32;

/// Errors returned by the filesystem core.
///
/// `OutOfSpace` from the design is deliberately absent here: running out of
/// space during a write is communicated through the returned byte count, not
/// through this enum (see [`crate::SimpleFs::write`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A block device read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The superblock's magic did not match [`crate::layout::MAGIC`].
    #[error("bad superblock magic")]
    BadMagic,
    /// The operation requires a mounted filesystem, but none is mounted.
    #[error("filesystem not mounted")]
    NotMounted,
    /// `mount` (or `format`) was attempted on a handle that is already mounted.
    #[error("filesystem already mounted")]
    AlreadyMounted,
    /// The inode number is out of range, or the slot is not valid.
    #[error("inode {0} not found")]
    NotFound(InodeNumber),
    /// The inode table has no free slot.
    #[error("no free inode")]
    OutOfInodes,
    /// A supplied argument was malformed (out-of-range index, bad offset/length, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// The result type used throughout the filesystem core.
pub type Result<T> = std::result::Result<T, Error>;
