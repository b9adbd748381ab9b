//! xattr 命名空间前缀处理
//!
//! 属性名携带完整的命名空间前缀（如 "user.", "trusted." 等）存储在
//! 磁盘上。本模块提供特权命名空间的过滤判定和前缀合法性检查。

use crate::consts::*;

/// 已知命名空间前缀表
static PREFIX_TABLE: &[&[u8]] = &[
    SQUASHFS_XATTR_USER_PREFIX,
    SQUASHFS_XATTR_TRUSTED_PREFIX,
    SQUASHFS_XATTR_SECURITY_PREFIX,
    SQUASHFS_XATTR_SYSTEM_PREFIX,
];

/// 判断属性名是否应对调用方隐藏
///
/// 只有特权（"trusted."）命名空间需要提权才能访问；
/// 其余命名空间对所有调用方可见。
///
/// # 参数
///
/// * `name` - 属性名（原始字节）
/// * `privileged` - 调用方是否持有特权（由调用方的安全上下文提供）
///
/// # 返回
///
/// `true` 表示该属性名对本次调用不可见
pub fn filtered(name: &[u8], privileged: bool) -> bool {
    if privileged {
        return false;
    }

    name.starts_with(SQUASHFS_XATTR_TRUSTED_PREFIX)
}

/// 判断属性名是否带有已知命名空间前缀
///
/// 供调用方做请求校验；List/Get 不消费该判定，
/// 磁盘上的属性名原样通过。
pub fn is_valid_namespace(name: &[u8]) -> bool {
    PREFIX_TABLE
        .iter()
        .any(|prefix| name.len() > prefix.len() && name.starts_with(prefix))
}
