//! xattr 定位符编解码
//!
//! 每个文件系统对象至多关联一个 32 位定位符，指向共享 xattr 表中
//! 该对象的属性集起点。高 19 位是相对 xattr 表基地址的元数据块位移，
//! 低 13 位是块内字节偏移（恒小于 8192）。

use crate::consts::*;
use crate::metadata::MetadataPosition;

/// 32 位 xattr 定位符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XattrLocator(pub u32);

impl XattrLocator {
    /// "无属性" 哨兵定位符
    pub const NONE: Self = Self(SQUASHFS_XATTR_NONE);

    /// 是否为 "无属性" 哨兵
    ///
    /// 哨兵表示该对象没有属性集，与 "镜像中整个 xattr 表缺失"
    /// （整个特性被禁用）是两种不同的情况。
    pub const fn is_none(self) -> bool {
        self.0 == SQUASHFS_XATTR_NONE
    }

    /// 解码为元数据游标位置
    ///
    /// # 参数
    ///
    /// * `table_base` - 文件系统级 xattr 表基地址
    ///
    /// # 返回
    ///
    /// 属性集起点的 (块地址, 块内偏移)
    pub fn decode(self, table_base: u64) -> MetadataPosition {
        let block = table_base + u64::from(self.0 >> SQUASHFS_XATTR_OFFSET_BITS);
        let offset = (self.0 & SQUASHFS_XATTR_OFFSET_MASK) as u16;
        MetadataPosition::new(block, offset)
    }
}

impl From<u32> for XattrLocator {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_splits_block_and_offset() {
        let locator = XattrLocator((5 << 13) | 123);
        let pos = locator.decode(100);
        assert_eq!(pos.block, 105);
        assert_eq!(pos.offset, 123);
    }

    #[test]
    fn test_decode_zero_locator() {
        let pos = XattrLocator(0).decode(7);
        assert_eq!(pos.block, 7);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_offset_is_masked_to_13_bits() {
        let locator = XattrLocator(8191);
        let pos = locator.decode(0);
        assert_eq!(pos.block, 0);
        assert_eq!(pos.offset, 8191);

        let locator = XattrLocator(8192);
        let pos = locator.decode(0);
        assert_eq!(pos.block, 1);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_none_sentinel() {
        assert!(XattrLocator::NONE.is_none());
        assert!(XattrLocator(0xFFFF_FFFF).is_none());
        assert!(!XattrLocator(0).is_none());
    }
}
