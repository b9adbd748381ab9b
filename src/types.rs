//! xattr 磁盘格式数据结构定义
//!
//! 这个模块包含了直接对应磁盘格式的数据结构。
//!
//! ## 设计原则
//!
//! 1. **磁盘格式结构** - 保留 C 风格命名（便于对照磁盘格式文档）
//! 2. **字节序** - 所有整数字段均为小端，无任何填充字节
//! 3. **辅助方法** - 提供从原始字节解码的工具函数

#![allow(non_camel_case_types)] // 允许C风格命名

use byteorder::{ByteOrder, LittleEndian};

use crate::consts::*;

//=============================================================================
// 磁盘格式结构定义
//=============================================================================

/// 属性集头部
///
/// 每个属性集只有一个头部：一个小端 32 位的总大小字段。
/// `size` 包含头部自身的 4 字节；条目可用的剩余字节预算为 `size - 4`。
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct squashfs_xattr_header {
    pub size: u32, // 0: 属性集总大小（含本头部）
}

/// 属性条目头部
///
/// 紧随其后的是 `name_len` 字节的属性名和 `value_len` 字节的属性值，
/// 中间没有任何填充。磁盘上的属性名不保证以 0 结尾。
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct squashfs_xattr_entry {
    pub name_len: u32,  // 0: 属性名长度
    pub value_len: u32, // 4: 属性值长度
}

//=============================================================================
// 解码辅助
//=============================================================================

impl squashfs_xattr_header {
    /// 从原始字节解码头部
    pub fn from_bytes(buf: &[u8; SQUASHFS_XATTR_HEADER_SIZE]) -> Self {
        Self {
            size: LittleEndian::read_u32(&buf[0..4]),
        }
    }
}

impl squashfs_xattr_entry {
    /// 从原始字节解码条目头部
    pub fn from_bytes(buf: &[u8; SQUASHFS_XATTR_ENTRY_SIZE]) -> Self {
        Self {
            name_len: LittleEndian::read_u32(&buf[0..4]),
            value_len: LittleEndian::read_u32(&buf[4..8]),
        }
    }
}
