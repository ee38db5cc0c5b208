//! 内部功能键
//!
//! 每个变体对应一个由应用自身渲染的功能视图（区别于内嵌外部页面）。
//! 解析器只产出键；加载哪个组件由前端的视图注册表决定。

use std::fmt::Display;

/// 内部功能视图的稳定键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Downloads,
    PlataformaDesktop,
    Videoaulas,
    NoticiasJuridicas,
    BancoQuestoes,
    Flashcards,
    BibliotecaClassicos,
    Loja,
    AssistenteIa,
    PlanoEstudo,
    Redacao,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::Downloads,
        Feature::PlataformaDesktop,
        Feature::Videoaulas,
        Feature::NoticiasJuridicas,
        Feature::BancoQuestoes,
        Feature::Flashcards,
        Feature::BibliotecaClassicos,
        Feature::Loja,
        Feature::AssistenteIa,
        Feature::PlanoEstudo,
        Feature::Redacao,
    ];

    /// 稳定键（日志与调试用）
    pub fn key(self) -> &'static str {
        match self {
            Feature::Downloads => "downloads",
            Feature::PlataformaDesktop => "plataforma_desktop",
            Feature::Videoaulas => "videoaulas",
            Feature::NoticiasJuridicas => "noticias_juridicas",
            Feature::BancoQuestoes => "banco_questoes",
            Feature::Flashcards => "flashcards",
            Feature::BibliotecaClassicos => "biblioteca_classicos",
            Feature::Loja => "loja",
            Feature::AssistenteIa => "assistente_ia",
            Feature::PlanoEstudo => "plano_estudo",
            Feature::Redacao => "redacao",
        }
    }

    /// 界面标题
    pub fn title(self) -> &'static str {
        match self {
            Feature::Downloads => "Downloads",
            Feature::PlataformaDesktop => "Plataforma Desktop",
            Feature::Videoaulas => "Videoaulas",
            Feature::NoticiasJuridicas => "Notícias Jurídicas",
            Feature::BancoQuestoes => "Banco de Questões",
            Feature::Flashcards => "Flashcards",
            Feature::BibliotecaClassicos => "Biblioteca de Estudos",
            Feature::Loja => "Loja",
            Feature::AssistenteIa => "Assistente IA Jurídica",
            Feature::PlanoEstudo => "Plano de Estudo",
            Feature::Redacao => "Redação",
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in Feature::ALL.iter().enumerate() {
            for b in &Feature::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }
}
