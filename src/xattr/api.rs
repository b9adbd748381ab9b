//! xattr 查询 API
//!
//! 提供属性集的两个对外查询操作：枚举全部属性名（list）和
//! 读取单个属性值（get），缓冲区大小语义：
//!
//! - `buffer` 为 `None`：只返回所需的字节数，不写任何缓冲区
//! - 缓冲区不足：返回 OutOfRange 错误，已写入的部分内容无意义
//!
//! 两个操作都是一次性的同步调用，迭代器状态由本次调用独占，
//! 调用结束（成功、未找到或出错）即释放。

use crate::error::{Error, ErrorKind, Result};
use crate::metadata::MetadataReader;

use super::iter::XattrIterator;
use super::locator::XattrLocator;
use super::prefix::filtered;

/// 枚举对象的全部属性名
///
/// # 参数
///
/// * `reader` - 元数据读取器
/// * `table_base` - xattr 表基地址；`None` 表示镜像没有 xattr 表
/// * `locator` - 对象的属性集定位符
/// * `buffer` - 输出缓冲区（名称以 0 结尾依次排列）；`None` 时只计算大小
/// * `privileged` - 调用方是否持有特权（决定特权命名空间是否可见）
///
/// # 返回
///
/// 成功返回写入（或所需）的字节数；对象没有属性集时返回 0。
/// 每个可见条目贡献 `name_len + 1` 字节（名称加结尾 0）。
///
/// # 示例
///
/// ```rust,ignore
/// // 先探测所需大小，再用精确大小的缓冲区取回名称
/// let required = list(&mut reader, table_base, locator, None, false)?;
/// let mut names = vec![0u8; required];
/// list(&mut reader, table_base, locator, Some(&mut names), false)?;
/// ```
pub fn list<R: MetadataReader>(
    reader: &mut R,
    table_base: Option<u64>,
    locator: XattrLocator,
    mut buffer: Option<&mut [u8]>,
    privileged: bool,
) -> Result<usize> {
    let mut iter = match XattrIterator::start(reader, table_base, locator)? {
        Some(iter) => iter,
        None => return Ok(0),
    };

    let mut written = 0;

    while let Some(entry) = iter.next_entry()? {
        if filtered(&entry.name, privileged) {
            continue;
        }

        let count = entry.name.len() + 1;

        let buf = match buffer.as_deref_mut() {
            Some(buf) => buf,
            None => {
                written += count;
                continue;
            }
        };

        if buf.len() - written < count {
            return Err(Error::new(ErrorKind::OutOfRange, "list buffer too small"));
        }

        buf[written..written + entry.name.len()].copy_from_slice(&entry.name);
        buf[written + entry.name.len()] = 0;
        written += count;
    }

    Ok(written)
}

/// 读取对象的单个属性值
///
/// 属性名比较是两边全长的字节相等比较；查询名是磁盘名的真前缀时
/// 不会误判为命中。
///
/// # 参数
///
/// * `reader` - 元数据读取器
/// * `table_base` - xattr 表基地址；`None` 表示镜像没有 xattr 表
/// * `locator` - 对象的属性集定位符
/// * `name` - 要查找的属性名（含命名空间前缀）
/// * `buffer` - 输出缓冲区；`None` 时只返回值的长度
/// * `privileged` - 调用方是否持有特权
///
/// # 返回
///
/// 成功返回值的长度；属性不存在（或对调用方不可见）时返回 NotFound。
pub fn get<R: MetadataReader>(
    reader: &mut R,
    table_base: Option<u64>,
    locator: XattrLocator,
    name: &[u8],
    buffer: Option<&mut [u8]>,
    privileged: bool,
) -> Result<usize> {
    let mut iter = match XattrIterator::start(reader, table_base, locator)? {
        Some(iter) => iter,
        None => return Err(Error::new(ErrorKind::NotFound, "xattr not found")),
    };

    while let Some(entry) = iter.next_entry()? {
        if entry.name != name {
            continue;
        }
        if filtered(&entry.name, privileged) {
            // 特权命名空间对非特权调用方不可达
            continue;
        }

        log::trace!("xattr hit, value_len={}", entry.value.len());

        let value_len = entry.value.len();
        return match buffer {
            None => Ok(value_len),
            Some(buf) => {
                if buf.len() < value_len {
                    return Err(Error::new(ErrorKind::OutOfRange, "get buffer too small"));
                }
                buf[..value_len].copy_from_slice(&entry.value);
                Ok(value_len)
            }
        };
    }

    Err(Error::new(ErrorKind::NotFound, "xattr not found"))
}
