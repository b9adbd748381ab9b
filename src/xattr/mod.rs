//! Extended Attributes (xattr) 解码子系统
//!
//! 属性集打包在压缩元数据块中，存储在共享 xattr 表里。每个对象用
//! 一个 32 位定位符寻址自己的属性集：高 19 位是元数据块位移，
//! 低 13 位是块内偏移。属性集本身是一个 32 位总大小头部加若干
//! 顺序排列的 name/value 条目，只能顺序解析。
//!
//! 本子系统只读：解码不可信的磁盘编码并回答两个查询
//! （[`list`] 和 [`get`]），所有长度字段都对照剩余字节预算校验。

mod api;
mod iter;
mod locator;
mod prefix;

pub use api::{get, list};
pub use iter::{XattrEntry, XattrIterator};
pub use locator::XattrLocator;
pub use prefix::{filtered, is_valid_namespace};

#[cfg(test)]
pub(crate) mod testutil {
    //! xattr 测试编码辅助

    use alloc::vec::Vec;

    /// 把 name/value 对编码为磁盘上的属性集字节
    pub(crate) fn encode_xattr_set(entries: &[(&[u8], &[u8])]) -> Vec<u8> {
        let total: usize = 4 + entries
            .iter()
            .map(|(name, value)| 8 + name.len() + value.len())
            .sum::<usize>();

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&(total as u32).to_le_bytes());
        for (name, value) in entries {
            out.extend_from_slice(&(name.len() as u32).to_le_bytes());
            out.extend_from_slice(&(value.len() as u32).to_le_bytes());
            out.extend_from_slice(name);
            out.extend_from_slice(value);
        }
        out
    }
}
