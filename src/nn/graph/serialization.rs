/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : Graph 底层参数序列化
 *
 * 职责：纯二进制读写，只处理参数段
 *
 * 与 model_io.rs 的区别：
 * - serialization.rs：底层二进制序列化（只处理参数的原始读写）
 * - model_io.rs：高层模型 I/O（文件头 + 图描述 + 调用底层序列化）
 *
 * 参数段格式（小端序）：
 *   u32 参数个数
 *   逐个参数：u32 名称长度 | UTF-8 名称 | u32 数据长度 | bincode 编码的张量
 */

use super::{Graph, GraphError};
use crate::tensor::Tensor;
use std::collections::HashMap;
use std::io::{Read, Write};

impl Graph {
    /// 写出参数段，参数按名称排序以保证输出稳定
    pub(super) fn write_params<W: Write>(&self, writer: &mut W) -> Result<(), GraphError> {
        let mut names: Vec<&String> = self.params.keys().collect();
        names.sort();

        write_u32(writer, names.len())?;
        for name in names {
            let blob = self.params[name].to_bytes()?;
            write_u32(writer, name.len())?;
            writer.write_all(name.as_bytes())?;
            write_u32(writer, blob.len())?;
            writer.write_all(&blob)?;
        }
        Ok(())
    }

    /// 读入参数段
    pub(super) fn read_params<R: Read>(reader: &mut R) -> Result<HashMap<String, Tensor>, GraphError> {
        let param_count = read_u32(reader)?;
        let mut params = HashMap::new();

        for _ in 0..param_count {
            let name_len = read_u32(reader)?;
            let name_bytes = read_bytes(reader, name_len, "参数名称")?;
            let name = String::from_utf8(name_bytes)
                .map_err(|e| GraphError::InvalidArtifact(format!("参数名称编码无效: {e}")))?;

            let blob_len = read_u32(reader)?;
            let blob = read_bytes(reader, blob_len, "参数数据")?;
            let tensor = Tensor::from_bytes(&blob)?;

            if params.insert(name.clone(), tensor).is_some() {
                return Err(GraphError::InvalidArtifact(format!("参数 {name} 重复出现")));
            }
        }
        Ok(params)
    }
}

pub(super) fn write_u32<W: Write>(writer: &mut W, value: usize) -> Result<(), GraphError> {
    let value = u32::try_from(value)
        .map_err(|_| GraphError::InvalidArtifact(format!("长度 {value} 超出 u32 范围")))?;
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

pub(super) fn read_u32<R: Read>(reader: &mut R) -> Result<u32, GraphError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

/// 按长度前缀读取一段字节。长度来自文件，只按实际读到的数据分配内存
pub(super) fn read_bytes<R: Read>(reader: &mut R, len: u32, what: &str) -> Result<Vec<u8>, GraphError> {
    let mut bytes = Vec::new();
    reader.by_ref().take(u64::from(len)).read_to_end(&mut bytes)?;
    if bytes.len() != len as usize {
        return Err(GraphError::InvalidArtifact(format!(
            "{what}被截断：声明 {len} 字节，实际只有 {} 字节",
            bytes.len()
        )));
    }
    Ok(bytes)
}
