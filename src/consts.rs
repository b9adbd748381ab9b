//! squashfs xattr 常量定义
//!
//! 这个模块包含了 xattr 子系统用到的磁盘格式常量，包括：
//! - 定位符（locator）的位域划分
//! - 条目长度上限
//! - 命名空间前缀

//=============================================================================
// 定位符相关
//=============================================================================

/// 定位符中块内偏移占用的位数
pub const SQUASHFS_XATTR_OFFSET_BITS: u32 = 13;

/// 块内偏移掩码（低 13 位，0..8191）
pub const SQUASHFS_XATTR_OFFSET_MASK: u32 = (1u32 << SQUASHFS_XATTR_OFFSET_BITS) - 1;

/// "无属性" 哨兵值
///
/// inode 的 xattr 字段等于该值时，对象没有任何扩展属性。
pub const SQUASHFS_XATTR_NONE: u32 = 0xFFFF_FFFF;

//=============================================================================
// 属性集编码
//=============================================================================

/// 属性集头部大小（字节）
pub const SQUASHFS_XATTR_HEADER_SIZE: usize = 4;

/// 条目头部大小（name_len + value_len，字节）
pub const SQUASHFS_XATTR_ENTRY_SIZE: usize = 8;

/// 属性名最大长度（字节）
pub const SQUASHFS_XATTR_NAME_MAX: usize = 4096;

/// 属性值最大长度（字节）
pub const SQUASHFS_XATTR_VALUE_MAX: usize = 65536;

//=============================================================================
// 命名空间
//=============================================================================

/// 特权命名空间前缀（仅限持有特权的调用方访问）
pub const SQUASHFS_XATTR_TRUSTED_PREFIX: &[u8] = b"trusted.";

/// 普通用户命名空间前缀
pub const SQUASHFS_XATTR_USER_PREFIX: &[u8] = b"user.";

/// 安全命名空间前缀
pub const SQUASHFS_XATTR_SECURITY_PREFIX: &[u8] = b"security.";

/// 系统命名空间前缀
pub const SQUASHFS_XATTR_SYSTEM_PREFIX: &[u8] = b"system.";
