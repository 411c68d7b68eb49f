//! Curated term lists and presence matching.
//!
//! Every scorer counts terms by presence: a term contributes once if it occurs
//! anywhere in the text, no matter how often. Lists are ordered and may be
//! extended (never replaced) through [`ExtraTerms`].

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Formal connective words used by the quality scorer.
pub const FORMAL_CONNECTIVES: &[&str] = &[
    "因此",
    "然而",
    "此外",
    "综上所述",
    "研究表明",
    "根据",
    "由于",
];

/// Domain-general academic terms.
pub const ACADEMIC_TERMS: &[&str] = &["理论", "模型", "框架", "方法", "分析", "研究", "数据"];

/// First, second, and third person pronouns penalized by the formality score.
pub const PRONOUNS: &[&str] = &["我", "你", "他", "她", "我们", "你们", "他们"];

/// Communication theories.
pub const COMMUNICATION_THEORIES: &[&str] = &[
    "议程设置",
    "框架理论",
    "把关人",
    "意见领袖",
    "两级传播",
    "使用与满足",
    "培养理论",
    "沉默的螺旋",
    "知沟理论",
    "第三人效果",
    "媒介依赖",
    "社会认知理论",
    "社会学习理论",
    "创新扩散",
    "技术接受模型",
];

/// Communication research methods.
pub const RESEARCH_METHODS: &[&str] = &[
    "内容分析",
    "问卷调查",
    "深度访谈",
    "焦点小组",
    "实验法",
    "案例研究",
    "民族志",
    "话语分析",
    "网络分析",
    "大数据分析",
    "文本挖掘",
];

/// Media industry vocabulary.
pub const INDUSTRY_TERMS: &[&str] = &[
    "新闻业",
    "媒体",
    "广播电视",
    "网络媒体",
    "社交媒体",
    "自媒体",
    "新闻生产",
    "新闻消费",
    "媒体融合",
    "数字化转型",
    "算法推荐",
    "假新闻",
    "信息茧房",
    "回音室",
    "过滤气泡",
];

/// Terms tying a study to public or social value.
pub const SOCIAL_VALUE_TERMS: &[&str] = &[
    "公共舆论",
    "民主参与",
    "社会监督",
    "信息传播",
    "知识普及",
    "文化传承",
    "社会整合",
    "舆论引导",
    "危机传播",
    "健康传播",
    "科学传播",
    "环境传播",
    "政治传播",
    "国际传播",
];

/// Words signalling novelty.
pub const INNOVATION_INDICATORS: &[&str] = &[
    "新理论",
    "新方法",
    "新发现",
    "新视角",
    "新应用",
    "新模型",
    "首次",
    "突破",
    "创新",
    "原创",
    "前沿",
    "热点",
];

/// Connectives the recommendation rules look for. Wider than
/// [`FORMAL_CONNECTIVES`] by one entry.
pub const ADVISORY_CONNECTIVES: &[&str] = &[
    "因此",
    "然而",
    "此外",
    "综上所述",
    "研究表明",
    "根据",
    "由于",
    "由此可见",
];

/// Core journalism and communication vocabulary.
pub const DISCIPLINE_TERMS: &[&str] = &[
    "传播",
    "媒体",
    "新闻",
    "受众",
    "效果",
    "议程设置",
    "框架",
    "把关",
    "意见领袖",
];

/// Signs of theoretical framing.
pub const THEORY_INDICATORS: &[&str] = &["理论", "模型", "框架", "假设", "概念"];

/// Signs of a described research method.
pub const METHOD_INDICATORS: &[&str] = &["方法", "研究设计", "数据收集", "分析", "样本", "调查", "实验"];

/// Signs of a stated contribution.
pub const CONTRIBUTION_INDICATORS: &[&str] = &["创新", "新发现", "首次", "突破", "贡献"];

/// Abstract markers the recommendation rules search for, case-sensitively,
/// anywhere in the text.
pub const ABSTRACT_MARKERS: &[&str] = &["摘要", "Abstract"];

/// Keywords markers for the recommendation rules.
pub const KEYWORDS_MARKERS: &[&str] = &["关键词", "Keywords"];

/// References markers for the recommendation rules.
pub const REFERENCES_MARKERS: &[&str] = &["参考文献", "References"];

/// Returns `true` if any marker occurs verbatim in `text`.
pub fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

/// User-supplied additions to the built-in term lists.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ExtraTerms {
    /// Additional formal connectives.
    pub formal: Vec<String>,
    /// Additional academic terms.
    pub academic: Vec<String>,
    /// Additional communication theories.
    pub theories: Vec<String>,
    /// Additional research methods.
    pub methods: Vec<String>,
    /// Additional industry terms.
    pub industry: Vec<String>,
    /// Additional social-value terms.
    pub social: Vec<String>,
    /// Additional innovation indicators.
    pub innovation: Vec<String>,
}

impl ExtraTerms {
    /// Returns `true` if no list has additions.
    pub fn is_empty(&self) -> bool {
        self.formal.is_empty()
            && self.academic.is_empty()
            && self.theories.is_empty()
            && self.methods.is_empty()
            && self.industry.is_empty()
            && self.social.is_empty()
            && self.innovation.is_empty()
    }
}

/// Presence matcher over one term list.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl TermMatcher {
    /// Build a matcher from a built-in list plus any extras.
    ///
    /// Blank extras are rejected: an empty pattern would match every text.
    pub fn new(list: &'static str, builtin: &[&str], extra: &[String]) -> AnalysisResult<Self> {
        if let Some(pos) = extra.iter().position(|t| t.trim().is_empty()) {
            return Err(AnalysisError::InvalidTerm {
                list,
                reason: format!("entry {} is blank", pos + 1),
            });
        }

        let terms: Vec<String> = builtin
            .iter()
            .map(|t| (*t).to_string())
            .chain(extra.iter().cloned())
            .collect();

        let automaton = AhoCorasick::new(&terms).map_err(|e| AnalysisError::InvalidTerm {
            list,
            reason: e.to_string(),
        })?;

        Ok(Self { automaton, terms })
    }

    /// Number of list entries that occur at least once in `text`.
    pub fn count_present(&self, text: &str) -> usize {
        self.present_mask(text).into_iter().filter(|hit| *hit).count()
    }

    fn present_mask(&self, text: &str) -> Vec<bool> {
        let mut mask = vec![false; self.terms.len()];
        // Overlapping search so a term nested inside another still registers.
        for m in self.automaton.find_overlapping_iter(text) {
            mask[m.pattern().as_usize()] = true;
        }
        mask
    }
}
