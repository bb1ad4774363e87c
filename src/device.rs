//! The block device abstraction SimpleFS is layered over.
//!
//! Grounded on the teacher's own device-facing tools: `utils/src/disk.rs`'s
//! `get_disk_size` (the `BLKGETSIZE64` ioctl for block/char special files,
//! `File::metadata` for regular files) and `mkfs/src/ext2.rs`'s
//! `seek`/`read_exact`/`write_all` pattern for positioned block I/O.

use crate::error::{Error, Result};
use crate::layout::{Block, BLOCK_SIZE};
use libc::ioctl;
use std::ffi::c_long;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::os::fd::AsRawFd;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;

/// ioctl macro: command encoding, mirroring `utils/src/disk.rs`.
macro_rules! ioc {
    ($a:expr, $b:expr, $c:expr, $d:expr) => {
        (($a) << 30) | (($b) << 8) | ($c) | (($d) << 16)
    };
}

/// ioctl macro: read command.
macro_rules! ior {
    ($a:expr, $b:expr, $c:ty) => {
        ioc!(2, $a, $b, std::mem::size_of::<$c>() as c_long)
    };
}

/// ioctl command: get the size of a block device, in 512-byte sectors.
const BLKGETSIZE64: c_long = ior!(0x12, 114, u64);

/// A blocking, fixed-size block device: read one block, write one block,
/// report the block count and cumulative I/O counters. Consumed by the
/// filesystem core; the block device itself is plumbing (`spec.md` §1).
pub trait BlockDevice {
    /// Number of addressable blocks `[0, block_count())`.
    fn block_count(&self) -> u32;
    /// Reads block `block` into `buf`.
    fn read_block(&mut self, block: u32, buf: &mut Block) -> Result<()>;
    /// Writes `buf` to block `block`.
    fn write_block(&mut self, block: u32, buf: &Block) -> Result<()>;
    /// Cumulative number of blocks read since this device was opened.
    fn reads(&self) -> u64;
    /// Cumulative number of blocks written since this device was opened.
    fn writes(&self) -> u64;
}

/// A [`BlockDevice`] backed by a flat file (or a real block/char device node).
pub struct FileBlockDevice {
    file: File,
    blocks: u32,
    reads: u64,
    writes: u64,
}

impl FileBlockDevice {
    /// Creates (or truncates) the image at `path` and sizes it to hold
    /// `blocks` blocks, ready for [`crate::SimpleFs::format`].
    pub fn create(path: &Path, blocks: u32) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(blocks as u64 * BLOCK_SIZE as u64)?;
        log::debug!("created block device {}: {blocks} blocks", path.display());
        Ok(FileBlockDevice {
            file,
            blocks,
            reads: 0,
            writes: 0,
        })
    }

    /// Opens an existing image (or block/char device node) at `path`,
    /// deriving the block count from its size — `BLKGETSIZE64` for device
    /// nodes, the file length for regular files — mirroring
    /// `utils::disk::get_disk_size`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let sectors = Self::size_in_sectors(&file)?;
        let bytes = sectors * 512;
        let blocks = (bytes / BLOCK_SIZE as u64) as u32;
        log::debug!("opened block device {}: {blocks} blocks", path.display());
        Ok(FileBlockDevice {
            file,
            blocks,
            reads: 0,
            writes: 0,
        })
    }

    fn size_in_sectors(file: &File) -> Result<u64> {
        let metadata = file.metadata()?;
        let file_type = metadata.file_type();
        if file_type.is_block_device() || file_type.is_char_device() {
            let mut size: u64 = 0;
            let ret = unsafe { ioctl(file.as_raw_fd(), BLKGETSIZE64 as _, &mut size) };
            if ret < 0 {
                return Err(Error::Io(std::io::Error::last_os_error()));
            }
            Ok(size / 512)
        } else {
            Ok(metadata.len() / 512)
        }
    }

    fn check_range(&self, block: u32) -> Result<()> {
        if block >= self.blocks {
            return Err(Error::InvalidArgument("block index out of range"));
        }
        Ok(())
    }
}

impl BlockDevice for FileBlockDevice {
    fn block_count(&self) -> u32 {
        self.blocks
    }

    fn read_block(&mut self, block: u32, buf: &mut Block) -> Result<()> {
        self.check_range(block)?;
        self.file.seek(SeekFrom::Start(block as u64 * BLOCK_SIZE as u64))?;
        self.file.read_exact(&mut buf.0)?;
        self.reads += 1;
        Ok(())
    }

    fn write_block(&mut self, block: u32, buf: &Block) -> Result<()> {
        self.check_range(block)?;
        self.file.seek(SeekFrom::Start(block as u64 * BLOCK_SIZE as u64))?;
        self.file.write_all(&buf.0)?;
        self.writes += 1;
        Ok(())
    }

    fn reads(&self) -> u64 {
        self.reads
    }

    fn writes(&self) -> u64 {
        self.writes
    }
}

impl Drop for FileBlockDevice {
    fn drop(&mut self) {
        log::debug!(
            "closing block device: {} reads, {} writes",
            self.reads,
            self.writes
        );
    }
}
