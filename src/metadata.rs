//! 元数据读取抽象
//!
//! 提供顺序读取压缩元数据块的接口。xattr 子系统只消费该接口，
//! 不负责解压缩、块缓存或磁盘访问本身。
//!
//! 读取游标由 (块地址, 块内偏移) 组成，由读取方就地推进；
//! 读取可以透明地跨越元数据块边界。

use crate::error::Result;

/// 元数据流中的游标位置
///
/// `block` 是元数据块地址，`offset` 是该块解压后逻辑流中的字节偏移
/// （恒小于 8192）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataPosition {
    /// 元数据块地址
    pub block: u64,
    /// 块内字节偏移
    pub offset: u16,
}

impl MetadataPosition {
    /// 创建新的游标位置
    pub const fn new(block: u64, offset: u16) -> Self {
        Self { block, offset }
    }
}

/// 元数据读取接口
///
/// 实现此 trait 以提供对压缩元数据块的顺序读取。
///
/// # 约定
///
/// - 读取从 `pos` 开始，最多 `buf.len()` 字节，按需跨块并解压缩，
///   并按实际消费的字节数就地推进 `pos`。
/// - 只有在硬性流结束或错误时才返回少于请求的字节数；
///   调用方不得把短读当作 "重试" 信号。
/// - 重试（若有）完全是实现方的职责，调用方从不重试。
/// - 底层块缓存若被多个调用共享，其并发安全由实现方保证。
///
/// # 示例
///
/// ```rust,ignore
/// use squashfs_xattr::{MetadataReader, MetadataPosition, Result};
///
/// struct MyReader {
///     // ...
/// }
///
/// impl MetadataReader for MyReader {
///     fn read(&mut self, pos: &mut MetadataPosition, buf: &mut [u8]) -> Result<usize> {
///         // 解压缩并复制数据，推进 pos
///         Ok(buf.len())
///     }
/// }
/// ```
pub trait MetadataReader {
    /// 从 `pos` 读取最多 `buf.len()` 字节
    ///
    /// # 参数
    ///
    /// * `pos` - 游标位置，按实际读取量就地推进
    /// * `buf` - 目标缓冲区
    ///
    /// # 返回
    ///
    /// 成功返回实际读取的字节数
    fn read(&mut self, pos: &mut MetadataPosition, buf: &mut [u8]) -> Result<usize>;
}
