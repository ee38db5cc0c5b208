use serde::{Deserialize, Serialize};

pub mod feature;
pub mod resolve;

pub use feature::Feature;
pub use resolve::{RenderDecision, resolve};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 功能目录表（Supabase REST）
pub const TABLE_APP: &str = "app";
/// 用户档案表
pub const TABLE_PERFIS: &str = "perfis";
/// 用户设置表（持有 profile_type）
pub const TABLE_USER_SETTINGS: &str = "user_settings";
/// Supabase 项目 API Key 请求头
pub const HEADER_API_KEY: &str = "apikey";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 目录记录：`app` 表中的一行
///
/// `funcao` 是自由文本显示名，目录对它不保证唯一性；
/// `link` 非空表示该功能通过内嵌外部页面渲染。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub id: i64,
    pub funcao: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl FunctionRecord {
    /// 去除首尾空白后的有效链接
    ///
    /// 返回 None 如果链接缺失或只含空白字符
    pub fn trimmed_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// 在目录中查找与选中名称最匹配的记录
///
/// 这是 Catalog Provider 的职责，不属于解析器：
/// 先做大小写无关的全名匹配，再退化为双向子串包含。
pub fn find_record<'a>(records: &'a [FunctionRecord], name: &str) -> Option<&'a FunctionRecord> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    records
        .iter()
        .find(|r| r.funcao.trim().to_lowercase() == needle)
        .or_else(|| {
            records.iter().find(|r| {
                let hay = r.funcao.trim().to_lowercase();
                !hay.is_empty() && (hay.contains(&needle) || needle.contains(&hay))
            })
        })
}

/// 用户学习方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Faculdade,
    Concurso,
    Oab,
    Advogado,
}

impl ProfileType {
    pub const ALL: [ProfileType; 4] = [
        ProfileType::Faculdade,
        ProfileType::Concurso,
        ProfileType::Oab,
        ProfileType::Advogado,
    ];

    /// 序列化键（与 `user_settings.profile_type` 列一致）
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileType::Faculdade => "faculdade",
            ProfileType::Concurso => "concurso",
            ProfileType::Oab => "oab",
            ProfileType::Advogado => "advogado",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileType::Faculdade => "Faculdade de Direito",
            ProfileType::Concurso => "Concurso Público",
            ProfileType::Oab => "Exame da OAB",
            ProfileType::Advogado => "Advogado(a)",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        ProfileType::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

/// 已认证用户的档案（`perfis` + `user_settings` 合并视图）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub nome_completo: Option<String>,
    pub email: String,
    #[serde(default)]
    pub profile_type: Option<ProfileType>,
}

impl UserProfile {
    /// 用于界面展示的名称：优先全名，否则取邮箱 @ 前缀
    pub fn display_name(&self) -> &str {
        match self.nome_completo.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => self.email.split('@').next().unwrap_or("Usuário"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, funcao: &str) -> FunctionRecord {
        FunctionRecord {
            id,
            funcao: funcao.to_string(),
            descricao: None,
            link: None,
        }
    }

    #[test]
    fn find_prefers_exact_name_over_substring() {
        let records = vec![record(1, "Biblioteca de Estudos"), record(2, "Biblioteca")];
        let found = find_record(&records, "biblioteca").unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn find_falls_back_to_containment() {
        let records = vec![record(1, "Vade Mecum Digital")];
        assert_eq!(find_record(&records, "Vade Mecum").unwrap().id, 1);
        assert!(find_record(&records, "Flashcards").is_none());
    }

    #[test]
    fn find_ignores_empty_needle() {
        let records = vec![record(1, "Loja")];
        assert!(find_record(&records, "   ").is_none());
    }

    #[test]
    fn trimmed_link_filters_whitespace() {
        let mut r = record(1, "Vade Mecum Digital");
        assert_eq!(r.trimmed_link(), None);
        r.link = Some("   ".to_string());
        assert_eq!(r.trimmed_link(), None);
        r.link = Some(" https://vademecum.example.com ".to_string());
        assert_eq!(r.trimmed_link(), Some("https://vademecum.example.com"));
    }

    #[test]
    fn profile_type_round_trip() {
        for p in ProfileType::ALL {
            assert_eq!(ProfileType::from_key(p.as_str()), Some(p));
        }
        assert_eq!(ProfileType::from_key("estagiario"), None);
    }

    #[test]
    fn user_profile_display_name_fallback() {
        let mut p = UserProfile {
            id: "u1".into(),
            nome_completo: None,
            email: "ana@example.com".into(),
            profile_type: None,
        };
        assert_eq!(p.display_name(), "ana");
        p.nome_completo = Some("Ana Souza".into());
        assert_eq!(p.display_name(), "Ana Souza");
    }
}
