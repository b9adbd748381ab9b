//! squashfs_xattr: 只读压缩文件系统的扩展属性解码库
//!
//! 这是一个纯 Rust 实现的 squashfs 风格 xattr 解码库，旨在提供：
//! - **零 unsafe 代码**
//! - **Rust 惯用风格**的 API
//! - **对不可信磁盘数据的完整边界校验**
//!
//! 属性集以紧凑、非自描述的二进制编码存储在压缩元数据块中，
//! 没有索引和长度表，只能顺序解析；本库在每次读取前都对照
//! 剩余字节预算校验长度字段，保证损坏或恶意的镜像不会引起越界读。
//!
//! # 示例
//!
//! ```rust,ignore
//! use squashfs_xattr::{MetadataReader, MetadataPosition, XattrLocator, Result};
//!
//! // 实现 MetadataReader trait（由块缓存 / 解压缩层提供）
//! struct MyReader {
//!     // ...
//! }
//!
//! impl MetadataReader for MyReader {
//!     fn read(&mut self, pos: &mut MetadataPosition, buf: &mut [u8]) -> Result<usize> {
//!         // ...
//!         Ok(buf.len())
//!     }
//! }
//!
//! fn query(reader: &mut MyReader, table_base: Option<u64>, raw: u32) -> Result<()> {
//!     let locator = XattrLocator::from(raw);
//!
//!     // 探测所需大小，再取回全部属性名
//!     let required = squashfs_xattr::list(reader, table_base, locator, None, false)?;
//!     let mut names = vec![0u8; required];
//!     squashfs_xattr::list(reader, table_base, locator, Some(&mut names), false)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`consts`] - 磁盘格式常量定义
//! - [`types`] - 磁盘格式数据结构定义
//! - [`metadata`] - 元数据读取抽象（消费的接口）
//! - [`xattr`] - 定位符编解码、条目迭代和查询操作

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// ===== 核心模块 =====

/// 错误处理
pub mod error;

/// 常量定义
pub mod consts;

/// 数据结构定义
pub mod types;

/// 元数据读取抽象
pub mod metadata;

/// Extended Attributes (xattr)
pub mod xattr;

// ===== 公共导出 =====

// 错误处理
pub use error::{Error, ErrorKind, Result};

// 元数据读取
pub use metadata::{MetadataPosition, MetadataReader};

// Xattr
pub use xattr::{get, list, XattrEntry, XattrIterator, XattrLocator};
