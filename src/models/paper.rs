//! 试卷数据模型
//!
//! 后端返回的试卷是"平行数组"结构：每道题的各项信息按下标分散在
//! question_number / question_text / options 等数组中，由消费方按下标交叉引用。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 后端生成的试卷（平行数组结构）
///
/// 所有数组理论上等长；实际消费时以较短者为准，任何取值都用 get 防越界。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    /// 题目显示编号（不一定等于下标）
    #[serde(default, deserialize_with = "deserialize_labels")]
    pub question_number: Vec<String>,
    #[serde(default)]
    pub question_text: Vec<String>,
    /// 每题的选项映射（选项键 -> 选项文本）；键不保证连续或有序
    #[serde(default)]
    pub options: Vec<BTreeMap<String, String>>,
    /// 每题的正确答案：指向 options 的键（如 "B"），不是选项文本
    #[serde(default)]
    pub correct_answer: Vec<String>,
    #[serde(default)]
    pub subject: Vec<String>,
    /// 难度（约定为 easy/medium/hard，不区分大小写）
    #[serde(default)]
    pub difficulty: Vec<String>,
    #[serde(default)]
    pub concept: Vec<String>,
    #[serde(default)]
    pub explanation: Vec<String>,
    #[serde(default)]
    pub weightage: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Paper {
    /// 题目数量（以 question_number 为准）
    pub fn question_count(&self) -> usize {
        self.question_number.len()
    }
}

// Helper to deserialize question labels that may arrive as strings or integers
fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{SeqAccess, Visitor};
    use std::fmt;

    struct LabelsVisitor;

    impl<'de> Visitor<'de> for LabelsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of question labels (strings or integers)")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut labels = Vec::new();
            while let Some(value) = seq.next_element::<serde_json::Value>()? {
                let label = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    _ => String::new(),
                };
                labels.push(label);
            }
            Ok(labels)
        }
    }

    deserializer.deserialize_seq(LabelsVisitor)
}
