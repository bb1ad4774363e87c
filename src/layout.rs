//! On-disk layout: the superblock, inode, and indirect-block record formats,
//! and the typed, zero-copy views over a raw block buffer.
//!
//! Field encoding is fixed-width little-endian, as mandated by `spec.md` §6.
//! This differs from the teacher's `ext2.rs`, which overlays host-endian
//! structs directly onto the disk image (fine for a filesystem that is never
//! expected to cross architectures); SimpleFS's on-disk format is part of an
//! ABI this crate pins down explicitly, so every field is read and written
//! through `u32::to_le_bytes`/`from_le_bytes` rather than a raw struct copy.

use static_assertions::const_assert_eq;
use std::mem::size_of;

/// Bytes per block.
pub const BLOCK_SIZE: usize = 4096;
/// Superblock magic number.
pub const MAGIC: u32 = 0xf0f0_3410;
/// Inode records per inode-table block.
pub const INODES_PER_BLOCK: usize = 128;
/// Direct block pointers stored inline in an inode.
pub const POINTERS_PER_INODE: usize = 5;
/// Block pointers stored in one indirect block.
pub const POINTERS_PER_BLOCK: usize = BLOCK_SIZE / 4;

/// Byte size of one on-disk inode record.
pub const INODE_SIZE: usize = 4 + 4 + POINTERS_PER_INODE * 4 + 4;

const_assert_eq!(INODE_SIZE, 32);
const_assert_eq!(INODE_SIZE * INODES_PER_BLOCK, BLOCK_SIZE);
const_assert_eq!(POINTERS_PER_BLOCK * 4, BLOCK_SIZE);

/// The maximum number of bytes a single file may hold.
pub const MAX_FILE_SIZE: usize = BLOCK_SIZE * (POINTERS_PER_INODE + POINTERS_PER_BLOCK);

/// A raw, block-sized buffer as read from or written to the device.
///
/// `Block` is the single byte-addressable region four different on-disk
/// records are overlaid onto (superblock, inode table, indirect block,
/// opaque data) — the "union-typed block" of `spec.md` §4.1, expressed here
/// as explicit typed-view accessors rather than a C union, per `spec.md` §9.
#[derive(Clone)]
pub struct Block(pub [u8; BLOCK_SIZE]);

impl Block {
    /// A block filled with zero bytes.
    pub fn zeroed() -> Self {
        Block([0u8; BLOCK_SIZE])
    }

    /// Interprets this block as a superblock.
    pub fn as_superblock(&self) -> Superblock {
        Superblock::decode(&self.0)
    }

    /// Writes `sb` into this block, leaving the rest as don't-care padding.
    pub fn write_superblock(&mut self, sb: &Superblock) {
        sb.encode(&mut self.0);
    }

    /// Interprets this block as an array of inode records.
    pub fn as_inodes(&self) -> [Inode; INODES_PER_BLOCK] {
        let mut inodes = [Inode::default(); INODES_PER_BLOCK];
        for (i, inode) in inodes.iter_mut().enumerate() {
            let off = i * INODE_SIZE;
            *inode = Inode::decode(&self.0[off..off + INODE_SIZE]);
        }
        inodes
    }

    /// Writes one inode record at slot `slot` of this (inode-table) block.
    pub fn write_inode(&mut self, slot: usize, inode: &Inode) {
        let off = slot * INODE_SIZE;
        inode.encode(&mut self.0[off..off + INODE_SIZE]);
    }

    /// Reads one inode record at slot `slot` of this (inode-table) block.
    pub fn read_inode(&self, slot: usize) -> Inode {
        let off = slot * INODE_SIZE;
        Inode::decode(&self.0[off..off + INODE_SIZE])
    }

    /// Interprets this block as an array of indirect block pointers.
    pub fn as_pointers(&self) -> [u32; POINTERS_PER_BLOCK] {
        let mut pointers = [0u32; POINTERS_PER_BLOCK];
        for (i, p) in pointers.iter_mut().enumerate() {
            let off = i * 4;
            *p = u32::from_le_bytes(self.0[off..off + 4].try_into().unwrap());
        }
        pointers
    }

    /// Writes a full array of indirect block pointers into this block.
    pub fn write_pointers(&mut self, pointers: &[u32; POINTERS_PER_BLOCK]) {
        for (i, p) in pointers.iter().enumerate() {
            let off = i * 4;
            self.0[off..off + 4].copy_from_slice(&p.to_le_bytes());
        }
    }

    /// Reads a single pointer from slot `i` of this indirect block.
    pub fn read_pointer(&self, i: usize) -> u32 {
        let off = i * 4;
        u32::from_le_bytes(self.0[off..off + 4].try_into().unwrap())
    }

    /// Writes a single pointer into slot `i` of this indirect block.
    pub fn write_pointer(&mut self, i: usize, value: u32) {
        let off = i * 4;
        self.0[off..off + 4].copy_from_slice(&value.to_le_bytes());
    }
}

/// The filesystem superblock, stored at block 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Superblock {
    /// Identifies the device as formatted for SimpleFS; must equal [`MAGIC`].
    pub magic: u32,
    /// Total number of blocks on the device.
    pub blocks: u32,
    /// Number of blocks occupied by the inode table.
    pub inode_blocks: u32,
    /// Total number of inodes (`inode_blocks * INODES_PER_BLOCK`).
    pub inodes: u32,
}

impl Superblock {
    /// Computes the superblock for a freshly formatted device of `blocks` blocks.
    ///
    /// `inode_blocks = ceil(blocks * 0.10)`, per `spec.md` §3.
    pub fn for_device(blocks: u32) -> Self {
        let inode_blocks = ((blocks as u64 * 10).div_ceil(100)) as u32;
        let inodes = inode_blocks * INODES_PER_BLOCK as u32;
        Superblock {
            magic: MAGIC,
            blocks,
            inode_blocks,
            inodes,
        }
    }

    fn encode(&self, out: &mut [u8; BLOCK_SIZE]) {
        out[0..4].copy_from_slice(&self.magic.to_le_bytes());
        out[4..8].copy_from_slice(&self.blocks.to_le_bytes());
        out[8..12].copy_from_slice(&self.inode_blocks.to_le_bytes());
        out[12..16].copy_from_slice(&self.inodes.to_le_bytes());
    }

    fn decode(buf: &[u8; BLOCK_SIZE]) -> Self {
        Superblock {
            magic: u32::from_le_bytes(buf[0..4].try_into().unwrap()),
            blocks: u32::from_le_bytes(buf[4..8].try_into().unwrap()),
            inode_blocks: u32::from_le_bytes(buf[8..12].try_into().unwrap()),
            inodes: u32::from_le_bytes(buf[12..16].try_into().unwrap()),
        }
    }
}

/// One inode record: 32 bytes, `INODES_PER_BLOCK` of which pack one block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inode {
    /// `1` if this slot names a live file, `0` if it is free.
    pub valid: u32,
    /// File size in bytes.
    pub size: u32,
    /// Direct block pointers; `0` means "unassigned".
    pub direct: [u32; POINTERS_PER_INODE],
    /// Indirect block pointer; `0` means "no indirect block".
    pub indirect: u32,
}

impl Inode {
    /// Whether this inode is live (`valid == 1`).
    pub fn is_valid(&self) -> bool {
        self.valid == 1
    }

    /// Number of non-zero direct pointers, used by `debug`.
    pub fn direct_count(&self) -> usize {
        self.direct.iter().filter(|&&p| p != 0).count()
    }

    fn encode(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), INODE_SIZE);
        out[0..4].copy_from_slice(&self.valid.to_le_bytes());
        out[4..8].copy_from_slice(&self.size.to_le_bytes());
        for (i, p) in self.direct.iter().enumerate() {
            let off = 8 + i * 4;
            out[off..off + 4].copy_from_slice(&p.to_le_bytes());
        }
        out[28..32].copy_from_slice(&self.indirect.to_le_bytes());
    }

    fn decode(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), INODE_SIZE);
        let mut direct = [0u32; POINTERS_PER_INODE];
        for (i, p) in direct.iter_mut().enumerate() {
            let off = 8 + i * 4;
            *p = u32::from_le_bytes(buf[off..off + 4].try_into().unwrap());
        }
        Inode {
            valid: u32::from_le_bytes(buf[0..4].try_into().unwrap()),
            size: u32::from_le_bytes(buf[4..8].try_into().unwrap()),
            direct,
            indirect: u32::from_le_bytes(buf[28..32].try_into().unwrap()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn superblock_round_trip() {
        let sb = Superblock::for_device(100);
        assert_eq!(sb.inode_blocks, 10);
        assert_eq!(sb.inodes, 1280);
        let mut block = Block::zeroed();
        block.write_superblock(&sb);
        assert_eq!(block.as_superblock(), sb);
    }

    #[test]
    fn inode_round_trip() {
        let inode = Inode {
            valid: 1,
            size: 42,
            direct: [1, 2, 3, 0, 0],
            indirect: 0,
        };
        let mut block = Block::zeroed();
        block.write_inode(3, &inode);
        assert_eq!(block.read_inode(3), inode);
        assert_eq!(block.read_inode(0), Inode::default());
    }

    #[test]
    fn pointer_round_trip() {
        let mut block = Block::zeroed();
        block.write_pointer(0, 7);
        block.write_pointer(1023, 99);
        assert_eq!(block.read_pointer(0), 7);
        assert_eq!(block.read_pointer(1023), 99);
        assert_eq!(block.read_pointer(1), 0);
    }

    #[test]
    fn max_file_size_matches_spec() {
        assert_eq!(MAX_FILE_SIZE, BLOCK_SIZE * (POINTERS_PER_INODE + POINTERS_PER_BLOCK));
    }

    #[test]
    fn sizes_are_sane() {
        assert_eq!(size_of::<Inode>() >= INODE_SIZE, true);
    }
}
