//! Filesystem operations: the public surface that orchestrates the codec,
//! allocator, and inode table manager over a mounted block device.
//!
//! Grounded on the overall shape of `mkfs/src/ext2.rs`'s `Ext2Factory::create`
//! (write superblock, write zeroed metadata blocks) generalized from a
//! one-shot "make a filesystem" operation into the full mount/read/write
//! lifecycle `spec.md` §4.4 specifies, and on `Ext2Factory::is_present`'s
//! read-superblock-and-check-magic pattern for `mount`.

use crate::bitmap::Bitmap;
use crate::device::BlockDevice;
use crate::error::{Error, Result};
use crate::layout::{
    Block, Inode, Superblock, BLOCK_SIZE, INODES_PER_BLOCK, MAGIC, MAX_FILE_SIZE,
    POINTERS_PER_BLOCK, POINTERS_PER_INODE,
};

/// Unconditionally formats `device`: writes a fresh superblock and a zeroed
/// inode table. Data blocks are not zeroed (`spec.md` §4.4).
///
/// The caller must ensure `device` is not currently mounted by this process
/// (`spec.md` §4.4); this is a free function, not a [`SimpleFs`] method,
/// precisely because formatting happens before any handle has (or should
/// have) a mount on the device.
pub fn format<D: BlockDevice>(device: &mut D) -> Result<()> {
    let blocks = device.block_count();
    let superblock = Superblock::for_device(blocks);
    let mut block = Block::zeroed();
    block.write_superblock(&superblock);
    device.write_block(0, &block)?;

    let zero = Block::zeroed();
    for b in 1..=superblock.inode_blocks {
        device.write_block(b, &zero)?;
    }
    log::info!(
        "formatted device: {} blocks, {} inode blocks, {} inodes",
        superblock.blocks,
        superblock.inode_blocks,
        superblock.inodes
    );
    Ok(())
}

/// A mounted (or not-yet-mounted) SimpleFS handle.
///
/// Owns its superblock copy and its free-block bitmap exclusively; while
/// mounted, it also owns the block device (`spec.md` §3) — handed to
/// [`SimpleFs::mount`] and handed back by [`SimpleFs::unmount`].
pub struct SimpleFs<D: BlockDevice> {
    device: Option<D>,
    superblock: Superblock,
    bitmap: Bitmap,
}

/// Per-inode information reported by [`SimpleFs::debug`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InodeDebugInfo {
    /// The inode's number.
    pub number: u32,
    /// The inode's size in bytes.
    pub size: u32,
    /// Count of non-zero direct pointers.
    pub direct_count: usize,
    /// Whether an indirect block is allocated.
    pub has_indirect: bool,
}

/// A human-readable (not machine-consumed) snapshot of filesystem state,
/// per `spec.md` §6's debug output description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugInfo {
    /// Whether the superblock's magic matched [`MAGIC`].
    pub magic_valid: bool,
    /// Total blocks on the device.
    pub blocks: u32,
    /// Blocks occupied by the inode table.
    pub inode_blocks: u32,
    /// Total inode slots.
    pub inodes: u32,
    /// Every currently valid inode, in ascending inode-number order.
    pub live_inodes: Vec<InodeDebugInfo>,
}

impl<D: BlockDevice> SimpleFs<D> {
    /// Creates an unmounted filesystem handle.
    pub fn new() -> Self {
        SimpleFs {
            device: None,
            superblock: Superblock::default(),
            bitmap: Bitmap::new(0),
        }
    }

    /// Whether this handle currently has a device mounted.
    pub fn is_mounted(&self) -> bool {
        self.device.is_some()
    }

    /// Mounts `device`: reads and verifies the superblock, then rebuilds the
    /// free-block bitmap from the inode table (`spec.md` §4.3).
    ///
    /// On any failure (bad magic, I/O error) `device` is dropped; the caller
    /// should treat mount failure as the device never having been mounted.
    pub fn mount(&mut self, mut device: D) -> Result<()> {
        if self.device.is_some() {
            return Err(Error::AlreadyMounted);
        }
        let mut block = Block::zeroed();
        device.read_block(0, &mut block)?;
        let superblock = block.as_superblock();
        if superblock.magic != MAGIC {
            return Err(Error::BadMagic);
        }
        let bitmap = Self::build_bitmap(&mut device, &superblock)?;
        log::info!(
            "mounted device: {} blocks, {} inodes",
            superblock.blocks,
            superblock.inodes
        );
        self.superblock = superblock;
        self.bitmap = bitmap;
        self.device = Some(device);
        Ok(())
    }

    /// Releases the bitmap and hands the device back to the caller.
    pub fn unmount(&mut self) -> Result<D> {
        let device = self.device.take().ok_or(Error::NotMounted)?;
        self.bitmap = Bitmap::new(0);
        self.superblock = Superblock::default();
        Ok(device)
    }

    fn device_mut(&mut self) -> Result<&mut D> {
        self.device.as_mut().ok_or(Error::NotMounted)
    }

    /// Rebuilds the allocator bitmap from ground truth: the inode table.
    /// Block 0 and the inode-table blocks are permanently marked allocated.
    fn build_bitmap(device: &mut D, superblock: &Superblock) -> Result<Bitmap> {
        let mut bitmap = Bitmap::new(superblock.blocks as usize);
        for b in 0..=superblock.inode_blocks {
            bitmap.set(b as usize);
        }
        for table_block in 1..=superblock.inode_blocks {
            let mut block = Block::zeroed();
            device.read_block(table_block, &mut block)?;
            for slot in 0..INODES_PER_BLOCK {
                let inode = block.read_inode(slot);
                if !inode.is_valid() {
                    continue;
                }
                for &p in &inode.direct {
                    if p != 0 {
                        bitmap.set(p as usize);
                    }
                }
                if inode.size as usize > BLOCK_SIZE * POINTERS_PER_INODE && inode.indirect != 0 {
                    bitmap.set(inode.indirect as usize);
                    let mut indirect = Block::zeroed();
                    device.read_block(inode.indirect, &mut indirect)?;
                    for i in 0..POINTERS_PER_BLOCK {
                        let p = indirect.read_pointer(i);
                        if p != 0 {
                            bitmap.set(p as usize);
                        }
                    }
                }
            }
        }
        Ok(bitmap)
    }

    fn inode_location(&self, n: u32) -> Result<(u32, usize)> {
        if n >= self.superblock.inodes {
            return Err(Error::NotFound(n));
        }
        let block = 1 + n / INODES_PER_BLOCK as u32;
        let slot = (n % INODES_PER_BLOCK as u32) as usize;
        Ok((block, slot))
    }

    /// Loads inode `n`. Fails with [`Error::NotFound`] if `n` is out of
    /// range or the slot is not valid (`spec.md` §4.2).
    fn load_inode(&mut self, n: u32) -> Result<Inode> {
        let (block_no, slot) = self.inode_location(n)?;
        let mut block = Block::zeroed();
        self.device_mut()?.read_block(block_no, &mut block)?;
        let inode = block.read_inode(slot);
        if !inode.is_valid() {
            return Err(Error::NotFound(n));
        }
        Ok(inode)
    }

    /// Read-modify-writes the block containing inode `n`, storing `inode` at
    /// its slot. Called exactly once per mutation of an inode's on-disk
    /// state (`spec.md` §4.2).
    fn save_inode(&mut self, n: u32, inode: &Inode) -> Result<()> {
        let (block_no, slot) = self.inode_location(n)?;
        let mut block = Block::zeroed();
        self.device_mut()?.read_block(block_no, &mut block)?;
        block.write_inode(slot, inode);
        self.device_mut()?.write_block(block_no, &block)?;
        Ok(())
    }

    fn free_block(&mut self, block: u32) {
        self.bitmap.clear(block as usize);
    }

    fn allocate_block(&mut self) -> Option<u32> {
        let data_start = 1 + self.superblock.inode_blocks as usize;
        self.bitmap.allocate_from(data_start).map(|b| b as u32)
    }

    /// Scans the inode table for the first free slot, marks it valid with a
    /// zero-length empty file, and returns its number (`spec.md` §4.4).
    pub fn create(&mut self) -> Result<u32> {
        let inode_blocks = self.superblock.inode_blocks;
        for block_no in 1..=inode_blocks {
            let mut block = Block::zeroed();
            self.device_mut()?.read_block(block_no, &mut block)?;
            for slot in 0..INODES_PER_BLOCK {
                if !block.read_inode(slot).is_valid() {
                    let n = (block_no - 1) * INODES_PER_BLOCK as u32 + slot as u32;
                    let inode = Inode {
                        valid: 1,
                        size: 0,
                        direct: [0; POINTERS_PER_INODE],
                        indirect: 0,
                    };
                    block.write_inode(slot, &inode);
                    self.device_mut()?.write_block(block_no, &block)?;
                    log::debug!("created inode {n}");
                    return Ok(n);
                }
            }
        }
        Err(Error::OutOfInodes)
    }

    /// Frees every block referenced by inode `n` and clears it.
    pub fn remove(&mut self, n: u32) -> Result<()> {
        let inode = self.load_inode(n)?;
        for &p in &inode.direct {
            if p != 0 {
                self.free_block(p);
            }
        }
        if inode.size as usize > BLOCK_SIZE * POINTERS_PER_INODE && inode.indirect != 0 {
            let mut indirect = Block::zeroed();
            self.device_mut()?.read_block(inode.indirect, &mut indirect)?;
            for i in 0..POINTERS_PER_BLOCK {
                let p = indirect.read_pointer(i);
                if p != 0 {
                    self.free_block(p);
                }
            }
            self.free_block(inode.indirect);
        }
        let cleared = Inode::default();
        self.save_inode(n, &cleared)?;
        log::debug!("removed inode {n}");
        Ok(())
    }

    /// Returns the size, in bytes, of inode `n`.
    pub fn stat(&mut self, n: u32) -> Result<u32> {
        Ok(self.load_inode(n)?.size)
    }

    /// Resolves `logical_block` of `inode` to a physical block number for
    /// reading, consulting `indirect_cache` (loaded at most once per call,
    /// per `spec.md` §4.4). Returns `0` for an unassigned (sparse) block.
    fn resolve_for_read(
        &mut self,
        inode: &Inode,
        logical_block: usize,
        indirect_cache: &mut Option<Block>,
    ) -> Result<u32> {
        if logical_block < POINTERS_PER_INODE {
            return Ok(inode.direct[logical_block]);
        }
        if indirect_cache.is_none() {
            let mut block = Block::zeroed();
            if inode.indirect != 0 {
                self.device_mut()?.read_block(inode.indirect, &mut block)?;
            }
            *indirect_cache = Some(block);
        }
        let idx = logical_block - POINTERS_PER_INODE;
        Ok(indirect_cache.as_ref().unwrap().read_pointer(idx))
    }

    /// Reads up to `length` bytes of inode `n`'s content starting at
    /// `offset`, into `buf`. Returns the number of bytes read.
    pub fn read(&mut self, n: u32, buf: &mut [u8], length: usize, offset: usize) -> Result<usize> {
        let inode = self.load_inode(n)?;
        if offset >= inode.size as usize {
            return Ok(0);
        }
        let length = length.min(inode.size as usize - offset).min(buf.len());
        if length == 0 {
            return Ok(0);
        }

        let mut indirect_cache: Option<Block> = None;
        let mut cursor = offset;
        let mut written = 0usize;
        let mut to_copy = length;
        while to_copy > 0 {
            let logical_block = cursor / BLOCK_SIZE;
            let inner_offset = cursor % BLOCK_SIZE;
            let chunk = to_copy.min(BLOCK_SIZE - inner_offset);
            let physical = self.resolve_for_read(&inode, logical_block, &mut indirect_cache)?;
            if physical == 0 {
                buf[written..written + chunk].fill(0);
            } else {
                let mut block = Block::zeroed();
                self.device_mut()?.read_block(physical, &mut block)?;
                buf[written..written + chunk]
                    .copy_from_slice(&block.0[inner_offset..inner_offset + chunk]);
            }
            cursor += chunk;
            written += chunk;
            to_copy -= chunk;
        }
        Ok(written)
    }

    /// Resolves `logical_block` of `inode` for writing, allocating the
    /// direct pointer, the indirect block, or an indirect-slot entry as
    /// needed. Returns `None` if allocation fails (`OutOfSpace`); otherwise
    /// the physical block number and whether that pointer was just
    /// allocated (as opposed to already pointing at a block this inode
    /// previously wrote) — callers use the latter to avoid reading stale
    /// bytes off a block this inode has never written (`spec.md` I7).
    fn resolve_for_write(
        &mut self,
        inode: &mut Inode,
        logical_block: usize,
        indirect: &mut Option<(Block, bool)>,
    ) -> Result<Option<(u32, bool)>> {
        if logical_block < POINTERS_PER_INODE {
            if inode.direct[logical_block] == 0 {
                let Some(new_block) = self.allocate_block() else {
                    return Ok(None);
                };
                inode.direct[logical_block] = new_block;
                return Ok(Some((new_block, true)));
            }
            return Ok(Some((inode.direct[logical_block], false)));
        }

        if indirect.is_none() {
            if inode.indirect == 0 {
                let Some(new_block) = self.allocate_block() else {
                    return Ok(None);
                };
                inode.indirect = new_block;
                *indirect = Some((Block::zeroed(), true));
            } else {
                let mut block = Block::zeroed();
                self.device_mut()?.read_block(inode.indirect, &mut block)?;
                *indirect = Some((block, false));
            }
        }
        let idx = logical_block - POINTERS_PER_INODE;
        let (block, dirty) = indirect.as_mut().unwrap();
        let existing = block.read_pointer(idx);
        if existing != 0 {
            return Ok(Some((existing, false)));
        }
        let Some(new_block) = self.allocate_block() else {
            return Ok(None);
        };
        block.write_pointer(idx, new_block);
        *dirty = true;
        Ok(Some((new_block, true)))
    }

    /// Writes `buf` into inode `n`'s content starting at `offset`, growing
    /// the file (and allocating whatever blocks are needed) as required.
    /// Returns the number of bytes actually written, which is less than
    /// `buf.len()` only if the device ran out of space or the write would
    /// exceed [`MAX_FILE_SIZE`] (`spec.md` §4.4).
    ///
    /// A write starting past the current end of file first allocates and
    /// zero-fills every whole block between the old end of file and the
    /// first block this write touches, so no logical block in
    /// `[0, ceil(size/B))` is ever left unallocated (`spec.md` §4.4: "no
    /// sparse files"). Any block freshly allocated by this call — whether
    /// one of those gap blocks or the first/last block of the requested
    /// range — is written from a zeroed buffer rather than read back from
    /// disk, since a newly handed-out block may carry another inode's
    /// stale bytes (`spec.md` I7).
    pub fn write(&mut self, n: u32, buf: &[u8], offset: usize) -> Result<usize> {
        let mut inode = self.load_inode(n)?;
        if buf.is_empty() {
            return Ok(0);
        }
        let length = if offset >= MAX_FILE_SIZE {
            0
        } else {
            buf.len().min(MAX_FILE_SIZE - offset)
        };
        if length == 0 {
            return Ok(0);
        }

        let mut indirect: Option<(Block, bool)> = None;
        let mut out_of_space = false;

        let gap_start_block = (inode.size as usize).div_ceil(BLOCK_SIZE);
        let first_write_block = offset / BLOCK_SIZE;
        let mut cursor = gap_start_block * BLOCK_SIZE;
        for logical_block in gap_start_block..first_write_block {
            let physical = match self.resolve_for_write(&mut inode, logical_block, &mut indirect)? {
                Some((p, _fresh)) => p,
                None => {
                    out_of_space = true;
                    break;
                }
            };
            self.device_mut()?.write_block(physical, &Block::zeroed())?;
            cursor += BLOCK_SIZE;
        }

        let mut written = 0usize;
        if !out_of_space {
            cursor = offset;
            let mut to_copy = length;
            while to_copy > 0 {
                let logical_block = cursor / BLOCK_SIZE;
                let inner_offset = cursor % BLOCK_SIZE;
                let chunk = to_copy.min(BLOCK_SIZE - inner_offset);

                let (physical, fresh) =
                    match self.resolve_for_write(&mut inode, logical_block, &mut indirect)? {
                        Some(p) => p,
                        None => {
                            out_of_space = true;
                            break;
                        }
                    };

                let mut block = if fresh || (inner_offset == 0 && chunk == BLOCK_SIZE) {
                    Block::zeroed()
                } else {
                    let mut block = Block::zeroed();
                    self.device_mut()?.read_block(physical, &mut block)?;
                    block
                };
                block.0[inner_offset..inner_offset + chunk]
                    .copy_from_slice(&buf[written..written + chunk]);
                self.device_mut()?.write_block(physical, &block)?;

                cursor += chunk;
                written += chunk;
                to_copy -= chunk;
            }
        }

        inode.size = inode.size.max(cursor as u32);
        self.save_inode(n, &inode)?;
        if let Some((block, true)) = &indirect {
            self.device_mut()?.write_block(inode.indirect, block)?;
        }
        if out_of_space {
            log::warn!("write to inode {n} ran out of space after {written} bytes");
        }
        Ok(written)
    }

    /// Produces a human-readable snapshot of the mounted filesystem's state
    /// (`spec.md` §6's `fs_debug`).
    pub fn debug(&mut self) -> Result<DebugInfo> {
        if self.device.is_none() {
            return Err(Error::NotMounted);
        }
        let sb = self.superblock;
        let mut live_inodes = Vec::new();
        for block_no in 1..=sb.inode_blocks {
            let mut block = Block::zeroed();
            self.device_mut()?.read_block(block_no, &mut block)?;
            for slot in 0..INODES_PER_BLOCK {
                let inode = block.read_inode(slot);
                if inode.is_valid() {
                    let n = (block_no - 1) * INODES_PER_BLOCK as u32 + slot as u32;
                    live_inodes.push(InodeDebugInfo {
                        number: n,
                        size: inode.size,
                        direct_count: inode.direct_count(),
                        has_indirect: inode.indirect != 0,
                    });
                }
            }
        }
        Ok(DebugInfo {
            magic_valid: sb.magic == MAGIC,
            blocks: sb.blocks,
            inode_blocks: sb.inode_blocks,
            inodes: sb.inodes,
            live_inodes,
        })
    }
}

impl<D: BlockDevice> Default for SimpleFs<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::device::FileBlockDevice;
    use tempfile::NamedTempFile;

    fn formatted(blocks: u32) -> (NamedTempFile, FileBlockDevice) {
        let tmp = NamedTempFile::new().unwrap();
        let mut dev = FileBlockDevice::create(tmp.path(), blocks).unwrap();
        format(&mut dev).unwrap();
        (tmp, dev)
    }

    #[test]
    fn format_then_mount_then_debug_empty() {
        let (_tmp, dev) = formatted(100);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let info = fs.debug().unwrap();
        assert!(info.magic_valid);
        assert_eq!(info.blocks, 100);
        assert_eq!(info.inode_blocks, 10);
        assert_eq!(info.inodes, 1280);
        assert!(info.live_inodes.is_empty());
    }

    #[test]
    fn create_write_read_round_trip() {
        let (_tmp, dev) = formatted(100);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let n = fs.create().unwrap();
        assert_eq!(n, 0);
        let written = fs.write(n, b"hello", 0).unwrap();
        assert_eq!(written, 5);
        let mut buf = [0u8; 5];
        let read = fs.read(n, &mut buf, 5, 0).unwrap();
        assert_eq!(read, 5);
        assert_eq!(&buf, b"hello");
        assert_eq!(fs.stat(n).unwrap(), 5);
    }

    #[test]
    fn indirect_crossover() {
        let (_tmp, dev) = formatted(200);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let n = fs.create().unwrap();
        let data: Vec<u8> = (0..20481).map(|i: u32| (i % 256) as u8).collect();
        let written = fs.write(n, &data, 0).unwrap();
        assert_eq!(written, 20481);
        assert_eq!(fs.stat(n).unwrap(), 20481);
        let mut buf = vec![0u8; 20481];
        let read = fs.read(n, &mut buf, 20481, 0).unwrap();
        assert_eq!(read, 20481);
        assert_eq!(buf, data);
        let info = fs.debug().unwrap();
        let inode_info = info.live_inodes.iter().find(|i| i.number == n).unwrap();
        assert_eq!(inode_info.direct_count, POINTERS_PER_INODE);
        assert!(inode_info.has_indirect);
    }

    #[test]
    fn remove_frees_space_and_survives_remount() {
        let (tmp, dev) = formatted(200);
        {
            let mut fs = SimpleFs::new();
            fs.mount(dev).unwrap();
            let n = fs.create().unwrap();
            let data = vec![7u8; 20481];
            fs.write(n, &data, 0).unwrap();
            fs.remove(n).unwrap();
            assert!(matches!(fs.stat(n), Err(Error::NotFound(_))));
            fs.unmount().unwrap();
        }
        let dev2 = FileBlockDevice::open(tmp.path()).unwrap();
        let mut fs2 = SimpleFs::new();
        fs2.mount(dev2).unwrap();
        let info = fs2.debug().unwrap();
        assert!(info.live_inodes.is_empty());
    }

    #[test]
    fn out_of_space_partial_write() {
        let (_tmp, dev) = formatted(15);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let n = fs.create().unwrap();
        let data = vec![1u8; 13 * BLOCK_SIZE];
        let written = fs.write(n, &data, 0).unwrap();
        assert_eq!(written, 12 * BLOCK_SIZE);
        assert_eq!(fs.stat(n).unwrap() as usize, 12 * BLOCK_SIZE);
        let more = fs.write(n, b"x", 12 * BLOCK_SIZE).unwrap();
        assert_eq!(more, 0);
    }

    #[test]
    fn remount_rebuilds_bitmap_and_next_create_reuses_slot() {
        let (tmp, dev) = formatted(300);
        {
            let mut fs = SimpleFs::new();
            fs.mount(dev).unwrap();
            let a = fs.create().unwrap();
            let b = fs.create().unwrap();
            let c = fs.create().unwrap();
            fs.write(a, b"abc", 0).unwrap();
            fs.write(b, &vec![2u8; 20481], 0).unwrap();
            fs.write(c, b"xyz", 0).unwrap();
            assert_eq!((a, b, c), (0, 1, 2));
            fs.unmount().unwrap();
        }
        let dev2 = FileBlockDevice::open(tmp.path()).unwrap();
        let mut fs2 = SimpleFs::new();
        fs2.mount(dev2).unwrap();
        let info = fs2.debug().unwrap();
        assert_eq!(info.live_inodes.len(), 3);
        let next = fs2.create().unwrap();
        assert_eq!(next, 3);
    }

    #[test]
    fn read_offset_at_or_past_size_returns_zero() {
        let (_tmp, dev) = formatted(100);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let n = fs.create().unwrap();
        fs.write(n, b"hi", 0).unwrap();
        let mut buf = [0u8; 10];
        assert_eq!(fs.read(n, &mut buf, 10, 2).unwrap(), 0);
        assert_eq!(fs.read(n, &mut buf, 10, 100).unwrap(), 0);
    }

    #[test]
    fn write_at_offset_past_size_zero_fills_gap() {
        let (_tmp, dev) = formatted(100);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let n = fs.create().unwrap();
        fs.write(n, b"Z", 10).unwrap();
        assert_eq!(fs.stat(n).unwrap(), 11);
        let mut buf = [0u8; 11];
        fs.read(n, &mut buf, 11, 0).unwrap();
        assert_eq!(&buf[0..10], &[0u8; 10]);
        assert_eq!(buf[10], b'Z');
    }

    #[test]
    fn reused_block_does_not_leak_previous_inodes_data() {
        let (_tmp, dev) = formatted(100);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();

        let a = fs.create().unwrap();
        fs.write(a, &[0xffu8; BLOCK_SIZE], 0).unwrap();
        fs.remove(a).unwrap();

        let b = fs.create().unwrap();
        fs.write(b, b"Z", 10).unwrap();
        let mut buf = [0u8; 11];
        fs.read(b, &mut buf, 11, 0).unwrap();
        assert_eq!(&buf[0..10], &[0u8; 10]);
        assert_eq!(buf[10], b'Z');
    }

    #[test]
    fn write_past_end_of_file_allocates_every_intervening_block() {
        let (_tmp, dev) = formatted(100);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();

        let n = fs.create().unwrap();
        fs.write(n, b"x", BLOCK_SIZE * 3).unwrap();
        let info = fs.debug().unwrap();
        let inode_info = info.live_inodes.iter().find(|i| i.number == n).unwrap();
        assert_eq!(inode_info.direct_count, 4);

        let mut buf = [0xffu8; BLOCK_SIZE * 3];
        fs.read(n, &mut buf, BLOCK_SIZE * 3, 0).unwrap();
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn boundary_exactly_direct_capacity_has_no_indirect() {
        let (_tmp, dev) = formatted(30);
        let mut fs = SimpleFs::new();
        fs.mount(dev).unwrap();
        let n = fs.create().unwrap();
        let data = vec![9u8; BLOCK_SIZE * POINTERS_PER_INODE];
        fs.write(n, &data, 0).unwrap();
        let info = fs.debug().unwrap();
        let inode_info = info.live_inodes.iter().find(|i| i.number == n).unwrap();
        assert!(!inode_info.has_indirect);
    }

    #[test]
    fn double_mount_rejected() {
        let (_tmp1, dev1) = formatted(20);
        let (_tmp2, dev2) = formatted(20);
        let mut fs = SimpleFs::new();
        fs.mount(dev1).unwrap();
        assert!(matches!(fs.mount(dev2), Err(Error::AlreadyMounted)));
    }

    #[test]
    fn unmount_without_mount_rejected() {
        let mut fs = SimpleFs::<FileBlockDevice>::new();
        assert!(matches!(fs.unmount(), Err(Error::NotMounted)));
    }

    #[test]
    fn bad_magic_rejected() {
        let tmp = NamedTempFile::new().unwrap();
        let dev = FileBlockDevice::create(tmp.path(), 20).unwrap();
        let mut fs = SimpleFs::new();
        assert!(matches!(fs.mount(dev), Err(Error::BadMagic)));
    }
}
