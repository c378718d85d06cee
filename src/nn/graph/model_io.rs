/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : Graph 高层模型 I/O（save/load）
 *
 * 单文件格式（小端序）：
 *   4 字节魔数 "ECNN"
 *   u32 格式版本
 *   u32 图描述长度 | 图描述 JSON（GraphDescriptor）
 *   参数段（见 serialization.rs）
 */

use super::serialization::{read_bytes, read_u32, write_u32};
use super::{Graph, GraphError};
use crate::nn::descriptor::GraphDescriptor;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

impl Graph {
    /// 模型文件魔数
    pub const ARTIFACT_MAGIC: &'static [u8; 4] = b"ECNN";
    /// 模型文件格式版本
    pub const ARTIFACT_VERSION: u32 = 1;

    /// 保存完整模型（拓扑 + 参数）到单个文件
    ///
    /// 已存在的文件会被直接覆盖；父目录不存在时自动创建。
    ///
    /// # 示例
    /// ```ignore
    /// let graph = Graph::trace(&network)?;
    /// graph.save("models/stack4_model.pt")?;
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GraphError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        debug!(
            "模型 {} 已保存至 {}（{} 个节点，{} 个参数）",
            self.name(),
            path.display(),
            self.descriptor.nodes.len(),
            self.descriptor.total_params()
        );
        Ok(())
    }

    /// 从文件加载完整模型，无需预先用代码构建网络
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let graph = Self::read_from(&mut reader)?;
        debug!("已从 {} 加载模型 {}", path.display(), graph.name());
        Ok(graph)
    }

    /// 编码到任意写入器
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), GraphError> {
        writer.write_all(Self::ARTIFACT_MAGIC)?;
        writer.write_all(&Self::ARTIFACT_VERSION.to_le_bytes())?;

        let json = self.descriptor.to_json()?;
        write_u32(writer, json.len())?;
        writer.write_all(json.as_bytes())?;

        self.write_params(writer)
    }

    /// 从任意读取器解码，并校验图的完整性
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, GraphError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != Self::ARTIFACT_MAGIC {
            return Err(GraphError::InvalidArtifact(
                "魔数不符：这不是由 Graph::save() 保存的模型文件".to_string(),
            ));
        }

        let version = read_u32(reader)?;
        if version != Self::ARTIFACT_VERSION {
            return Err(GraphError::InvalidArtifact(format!(
                "不支持的模型文件版本: {version}（当前支持 {}）",
                Self::ARTIFACT_VERSION
            )));
        }

        let json_len = read_u32(reader)?;
        let json = read_bytes(reader, json_len, "图描述")?;
        let json = String::from_utf8(json)
            .map_err(|e| GraphError::InvalidArtifact(format!("图描述编码无效: {e}")))?;
        let descriptor = GraphDescriptor::from_json(&json)?;

        let params = Self::read_params(reader)?;
        Self::from_parts(descriptor, params)
    }
}
