//! 功能解析模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 给定导航选中的功能名与目录记录，决定采用哪种渲染方式。
//!
//! 匹配策略是刻意的宽松子串匹配：规则按优先级顺序逐条求值，
//! 首个命中即返回，碰撞不报错。两段规则表之间插入链接检查，
//! 因此前四个固定功能即使目录里带链接也始终走内部视图。

use crate::FunctionRecord;
use crate::feature::Feature;

/// 解析器的输出：三种渲染方式之一
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    /// 由应用自身渲染的内部功能视图
    Internal(Feature),
    /// 内嵌外部页面（iframe），URL 来自目录记录
    Embedded { url: String, title: String },
    /// 功能尚未可用的占位视图
    UnderDevelopment { title: String },
}

/// 单条匹配规则（谓词 + 结果）
///
/// 三种谓词按序检查，命中任意一种即算匹配：
/// - `exact`: 原始名称的字面精确匹配（区分大小写）
/// - `all_of`: 小写名称必须同时包含的全部子串
/// - `any_of`: 小写名称包含任意一个子串即可
struct Rule {
    any_of: &'static [&'static str],
    all_of: &'static [&'static str],
    exact: &'static [&'static str],
    feature: Feature,
}

impl Rule {
    fn is_match(&self, selected: &str, lower: &str) -> bool {
        if self.exact.iter().any(|e| *e == selected) {
            return true;
        }
        if !self.all_of.is_empty() && self.all_of.iter().all(|s| lower.contains(s)) {
            return true;
        }
        self.any_of.iter().any(|s| lower.contains(s))
    }
}

/// 固定内部功能：优先于目录链接检查
///
/// 顺序即优先级，不可随意调整。
const PINNED_RULES: &[Rule] = &[
    Rule {
        any_of: &["downloads"],
        all_of: &[],
        exact: &["Downloads"],
        feature: Feature::Downloads,
    },
    Rule {
        any_of: &["plataforma desktop"],
        all_of: &[],
        exact: &["Plataforma Desktop"],
        feature: Feature::PlataformaDesktop,
    },
    Rule {
        any_of: &["videoaulas", "vídeoaulas"],
        all_of: &[],
        exact: &["Videoaulas"],
        feature: Feature::Videoaulas,
    },
    Rule {
        any_of: &[
            "notícias jurídicas",
            "portais jurídicos",
            "noticias juridicas",
            "portais juridicos",
        ],
        all_of: &[],
        exact: &["Notícias Jurídicas", "Portais Jurídicos"],
        feature: Feature::NoticiasJuridicas,
    },
];

/// 无链接功能的第二段规则表：仅在链接检查落空后求值
const FALLBACK_RULES: &[Rule] = &[
    Rule {
        any_of: &["banco de questões", "banco questoes"],
        all_of: &[],
        exact: &[],
        feature: Feature::BancoQuestoes,
    },
    Rule {
        any_of: &["flashcards"],
        all_of: &[],
        exact: &[],
        feature: Feature::Flashcards,
    },
    Rule {
        any_of: &[],
        all_of: &["biblioteca", "clássicos"],
        exact: &[],
        feature: Feature::BibliotecaClassicos,
    },
    Rule {
        any_of: &["loja"],
        all_of: &[],
        exact: &[],
        feature: Feature::Loja,
    },
    Rule {
        any_of: &["assistente"],
        all_of: &[],
        exact: &["Assistente IA Jurídica", "Assistente IA"],
        feature: Feature::AssistenteIa,
    },
    Rule {
        any_of: &["plano"],
        all_of: &[],
        exact: &["Plano de Estudo"],
        feature: Feature::PlanoEstudo,
    },
    Rule {
        any_of: &["redação", "redacao"],
        all_of: &[],
        exact: &["Redação"],
        feature: Feature::Redacao,
    },
];

/// 解析选中的功能名，决定渲染方式
///
/// 全函数、无副作用、幂等：任何非空输入都会得到三种决策之一，
/// 最坏情况退化为占位视图。`record` 为目录侧已完成的查找结果
/// （参见 [`crate::find_record`]），None 表示目录中无对应记录。
///
/// 调用方必须等目录加载完成后再调用，否则加载期间的 None
/// 记录会把本应内嵌的功能误判为规则表或占位分支。
pub fn resolve(selected: &str, record: Option<&FunctionRecord>) -> RenderDecision {
    let lower = selected.to_lowercase();

    // 1. 固定内部功能优先，即使目录里带链接
    if let Some(rule) = PINNED_RULES.iter().find(|r| r.is_match(selected, &lower)) {
        return RenderDecision::Internal(rule.feature);
    }

    // 2. 目录记录带有效链接 → 内嵌外部页面
    if let Some(rec) = record {
        if let Some(link) = rec.trimmed_link() {
            let title = if rec.funcao.trim().is_empty() {
                selected.to_string()
            } else {
                rec.funcao.clone()
            };
            return RenderDecision::Embedded {
                url: link.to_string(),
                title,
            };
        }
    }

    // 3. 无链接功能的规则表
    if let Some(rule) = FALLBACK_RULES.iter().find(|r| r.is_match(selected, &lower)) {
        return RenderDecision::Internal(rule.feature);
    }

    // 4. 兜底：开发中占位
    RenderDecision::UnderDevelopment {
        title: selected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_link(funcao: &str, link: &str) -> FunctionRecord {
        FunctionRecord {
            id: 1,
            funcao: funcao.to_string(),
            descricao: None,
            link: Some(link.to_string()),
        }
    }

    fn record_without_link(funcao: &str) -> FunctionRecord {
        FunctionRecord {
            id: 1,
            funcao: funcao.to_string(),
            descricao: None,
            link: None,
        }
    }

    #[test]
    fn pinned_features_ignore_catalog_link() {
        let rec = record_with_link("Downloads", "https://example.com");
        assert_eq!(
            resolve("Downloads", Some(&rec)),
            RenderDecision::Internal(Feature::Downloads)
        );

        let rec = record_with_link("Videoaulas", "https://videos.example.com");
        assert_eq!(
            resolve("Videoaulas", Some(&rec)),
            RenderDecision::Internal(Feature::Videoaulas)
        );
    }

    #[test]
    fn link_takes_precedence_over_fallback_rules() {
        // 名称同时命中第二段规则表（"plano"），但链接在先
        let rec = record_with_link("Plano de Estudo Premium", "https://planos.example.com");
        assert_eq!(
            resolve("Plano de Estudo Premium", Some(&rec)),
            RenderDecision::Embedded {
                url: "https://planos.example.com".to_string(),
                title: "Plano de Estudo Premium".to_string(),
            }
        );
    }

    #[test]
    fn catalog_link_renders_embedded_page() {
        let rec = record_with_link("Vade Mecum Digital", "https://vademecum.example.com");
        assert_eq!(
            resolve("Vade Mecum Digital", Some(&rec)),
            RenderDecision::Embedded {
                url: "https://vademecum.example.com".to_string(),
                title: "Vade Mecum Digital".to_string(),
            }
        );
    }

    #[test]
    fn whitespace_link_falls_through() {
        let mut rec = record_without_link("Plano de Estudo");
        rec.link = Some("   ".to_string());
        assert_eq!(
            resolve("Plano de Estudo", Some(&rec)),
            RenderDecision::Internal(Feature::PlanoEstudo)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            resolve("FLASHCARDS", None),
            RenderDecision::Internal(Feature::Flashcards)
        );
        assert_eq!(resolve("FLASHCARDS", None), resolve("flashcards", None));
    }

    #[test]
    fn accented_and_plain_spellings_match() {
        assert_eq!(
            resolve("Vídeoaulas Gravadas", None),
            RenderDecision::Internal(Feature::Videoaulas)
        );
        assert_eq!(
            resolve("noticias juridicas do dia", None),
            RenderDecision::Internal(Feature::NoticiasJuridicas)
        );
        assert_eq!(
            resolve("Minha Redacao", None),
            RenderDecision::Internal(Feature::Redacao)
        );
    }

    #[test]
    fn biblioteca_requires_both_terms() {
        assert_eq!(
            resolve("Biblioteca de Clássicos", None),
            RenderDecision::Internal(Feature::BibliotecaClassicos)
        );
        // 只有 "biblioteca" 不触发，落到占位
        assert_eq!(
            resolve("Biblioteca Jurídica", None),
            RenderDecision::UnderDevelopment {
                title: "Biblioteca Jurídica".to_string(),
            }
        );
    }

    #[test]
    fn loose_substring_matches_are_intentional() {
        // 子串而非全词匹配："Minha Redação Avançada" 命中 "redação"
        assert_eq!(
            resolve("Minha Redação Avançada", None),
            RenderDecision::Internal(Feature::Redacao)
        );
        // "plano" 出现在任意位置即路由到 PlanoEstudo
        assert_eq!(
            resolve("Novo Plano Anual", None),
            RenderDecision::Internal(Feature::PlanoEstudo)
        );
    }

    #[test]
    fn fallback_order_resolves_collisions_silently() {
        // "assistente" 在 "plano" 之前求值
        assert_eq!(
            resolve("Assistente do Plano", None),
            RenderDecision::Internal(Feature::AssistenteIa)
        );
    }

    #[test]
    fn exact_names_route_without_record() {
        assert_eq!(
            resolve("Plano de Estudo", None),
            RenderDecision::Internal(Feature::PlanoEstudo)
        );
        assert_eq!(
            resolve("Assistente IA", None),
            RenderDecision::Internal(Feature::AssistenteIa)
        );
        assert_eq!(
            resolve("Plataforma Desktop", None),
            RenderDecision::Internal(Feature::PlataformaDesktop)
        );
    }

    #[test]
    fn unknown_name_degrades_to_placeholder() {
        assert_eq!(
            resolve("Some Unknown Feature Xyz", None),
            RenderDecision::UnderDevelopment {
                title: "Some Unknown Feature Xyz".to_string(),
            }
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let rec = record_with_link("Vade Mecum Digital", "https://vademecum.example.com");
        let a = resolve("Vade Mecum Digital", Some(&rec));
        let b = resolve("Vade Mecum Digital", Some(&rec));
        assert_eq!(a, b);
    }

    #[test]
    fn embedded_title_falls_back_to_selection() {
        let rec = record_with_link("  ", "https://example.com");
        assert_eq!(
            resolve("Vade Mecum Digital", Some(&rec)),
            RenderDecision::Embedded {
                url: "https://example.com".to_string(),
                title: "Vade Mecum Digital".to_string(),
            }
        );
    }
}
