//! 属性集头部解码与条目迭代
//!
//! 属性集是顺序编码的：一个 32 位总大小头部，后接若干
//! (name_len, value_len, name, value) 条目，没有索引也没有长度表。
//! 磁盘数据不可信，每个长度字段都要对照剩余字节预算校验，
//! 防止越界读取。

use alloc::vec::Vec;

use crate::consts::*;
use crate::error::{Error, ErrorKind, Result};
use crate::metadata::{MetadataPosition, MetadataReader};
use crate::types::{squashfs_xattr_entry, squashfs_xattr_header};

use super::locator::XattrLocator;

/// 一个解码完成的属性条目
///
/// 每次迭代步骤移出一个独立拥有的条目值；上一步的缓冲区随所有权
/// 转移或丢弃而释放，调用方不可能看到跨步骤的陈旧数据。
/// `name` 恰好包含磁盘上的 `name_len` 字节，不含结尾 0。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XattrEntry {
    /// 属性名（原始字节，不以 0 结尾）
    pub name: Vec<u8>,
    /// 属性值（原始字节）
    pub value: Vec<u8>,
}

/// 属性集条目迭代器
///
/// 由一次查询独占持有：构造时解码属性集头部并确立剩余字节预算，
/// 之后每步产出一个条目，直到预算耗尽或出错。耗尽与出错对本次
/// 查询都是终态。
#[derive(Debug)]
pub struct XattrIterator<'r, R: MetadataReader> {
    reader: &'r mut R,
    pos: MetadataPosition,
    remaining: u32,
}

impl<'r, R: MetadataReader> XattrIterator<'r, R> {
    /// 定位属性集并解码头部
    ///
    /// # 参数
    ///
    /// * `reader` - 元数据读取器
    /// * `table_base` - xattr 表基地址；`None` 表示镜像没有 xattr 表
    /// * `locator` - 对象的属性集定位符
    ///
    /// # 返回
    ///
    /// - `Ok(None)` - 对象没有属性集（表缺失或哨兵定位符），不是错误
    /// - `Ok(Some(iter))` - 头部解码成功，可以开始迭代
    /// - `Err(_)` - 头部读取失败或总大小字段损坏
    pub fn start(
        reader: &'r mut R,
        table_base: Option<u64>,
        locator: XattrLocator,
    ) -> Result<Option<Self>> {
        let table_base = match table_base {
            Some(base) => base,
            None => return Ok(None),
        };
        if locator.is_none() {
            return Ok(None);
        }

        let mut pos = locator.decode(table_base);

        let mut buf = [0u8; SQUASHFS_XATTR_HEADER_SIZE];
        let n = reader.read(&mut pos, &mut buf)?;
        if n < buf.len() {
            log::error!("xattr header short read: {} of {} bytes", n, buf.len());
            return Err(Error::new(ErrorKind::Io, "xattr header short read"));
        }

        let header = squashfs_xattr_header::from_bytes(&buf);
        if (header.size as usize) < SQUASHFS_XATTR_HEADER_SIZE {
            log::error!("xattr header size {} below minimum", header.size);
            return Err(Error::new(ErrorKind::Corrupted, "xattr header size too small"));
        }

        let remaining = header.size - SQUASHFS_XATTR_HEADER_SIZE as u32;
        log::trace!("xattr set at {:?}, {} entry bytes", pos, remaining);

        Ok(Some(Self {
            reader,
            pos,
            remaining,
        }))
    }

    /// 解码下一个条目
    ///
    /// # 返回
    ///
    /// - `Ok(Some(entry))` - 产出一个条目，预算相应扣减
    /// - `Ok(None)` - 预算恰好耗尽，迭代结束
    /// - `Err(_)` - 读取失败或长度字段损坏，迭代终止
    pub fn next_entry(&mut self) -> Result<Option<XattrEntry>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        if (self.remaining as usize) < SQUASHFS_XATTR_ENTRY_SIZE {
            log::error!("xattr entry header exceeds remaining {} bytes", self.remaining);
            return Err(Error::new(ErrorKind::Corrupted, "xattr entry too short"));
        }

        let mut buf = [0u8; SQUASHFS_XATTR_ENTRY_SIZE];
        self.read_exact(&mut buf, "xattr entry header")?;
        self.remaining -= SQUASHFS_XATTR_ENTRY_SIZE as u32;

        let entry = squashfs_xattr_entry::from_bytes(&buf);
        let name_len = entry.name_len as usize;
        let value_len = entry.value_len as usize;

        if name_len > SQUASHFS_XATTR_NAME_MAX || value_len > SQUASHFS_XATTR_VALUE_MAX {
            log::error!("xattr entry lengths {}:{} out of bounds", name_len, value_len);
            return Err(Error::new(ErrorKind::Corrupted, "xattr entry length out of bounds"));
        }

        // 上限校验之后 total 不会溢出 u32
        let total = (name_len + value_len) as u32;
        if total > self.remaining {
            log::error!("xattr entry length {} > remaining {}", total, self.remaining);
            return Err(Error::new(ErrorKind::Corrupted, "xattr entry exceeds set size"));
        }

        let mut name = try_alloc(name_len)?;
        let mut value = try_alloc(value_len)?;

        self.read_exact(&mut name, "xattr name")?;
        self.read_exact(&mut value, "xattr value")?;

        self.remaining -= total;
        log::trace!(
            "xattr entry name_len={} value_len={}, {} bytes left",
            name_len,
            value_len,
            self.remaining
        );

        Ok(Some(XattrEntry { name, value }))
    }

    /// 读满整个缓冲区，短读按损坏输入处理
    fn read_exact(&mut self, buf: &mut [u8], what: &'static str) -> Result<()> {
        let n = self.reader.read(&mut self.pos, buf)?;
        if n < buf.len() {
            log::error!("{} short read: {} of {} bytes", what, n, buf.len());
            return Err(Error::new(ErrorKind::Io, "metadata short read"));
        }
        Ok(())
    }
}

/// 分配一个 `len` 字节的零填充缓冲区，分配失败报 OutOfMemory
///
/// 长度来自磁盘（已对照上限校验），分配失败必须作为错误返回
/// 而不是中止进程。
fn try_alloc(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::new(ErrorKind::OutOfMemory, "xattr buffer allocation failed"))?;
    buf.resize(len, 0);
    Ok(buf)
}
