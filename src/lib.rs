//! SimpleFS: a minimalist block-structured filesystem layered over a
//! fixed-size block device.
//!
//! A single superblock at block 0 describes the device; a fixed-size inode
//! table follows it; the rest of the device is data blocks managed by a
//! free-block bitmap rebuilt at mount time. There are no directories, no
//! permissions, no timestamps, and no concurrent access support — files are
//! addressed purely by inode number. See [`SimpleFs`] for the operations,
//! [`layout`] for the on-disk record formats, and [`device::BlockDevice`]
//! for the storage contract the filesystem is layered over.

pub mod bitmap;
pub mod device;
pub mod error;
pub mod fs;
pub mod layout;

pub use device::{BlockDevice, FileBlockDevice};
pub use error::{Error, Result};
pub use fs::{format, DebugInfo, InodeDebugInfo, SimpleFs};
pub use layout::{
    BLOCK_SIZE, INODES_PER_BLOCK, INODE_SIZE, MAGIC, MAX_FILE_SIZE, POINTERS_PER_BLOCK,
    POINTERS_PER_INODE,
};
