use crate::components::app_function::FunctionHeader;
use crate::components::icons::Newspaper;
use leptos::prelude::*;

/// 新闻门户（在新标签页打开，不内嵌：这些站点多数禁止 iframe）
const PORTAIS: &[(&str, &str, &str)] = &[
    ("Conjur", "Consultor Jurídico — notícias e opinião", "https://www.conjur.com.br"),
    ("Migalhas", "Informativo jurídico diário", "https://www.migalhas.com.br"),
    ("STF Notícias", "Portal de notícias do Supremo Tribunal Federal", "https://portal.stf.jus.br/noticias/"),
    ("STJ Notícias", "Portal de notícias do Superior Tribunal de Justiça", "https://www.stj.jus.br/sites/portalp/Comunicacao/Noticias"),
    ("Jota", "Cobertura dos tribunais e do legislativo", "https://www.jota.info"),
    ("Âmbito Jurídico", "Artigos e atualidades", "https://ambitojuridico.com.br"),
];

#[component]
pub fn NoticiasJuridicas() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-base-100 overflow-y-auto">
            <FunctionHeader title="Notícias Jurídicas" />
            <div class="pt-14 max-w-3xl mx-auto p-4">
                <div class="space-y-3 py-4">
                    {PORTAIS
                        .iter()
                        .map(|(nome, desc, url)| {
                            view! {
                                <a
                                    href=*url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="card bg-base-200 hover:bg-base-300 transition-colors block"
                                >
                                    <div class="card-body flex-row items-center gap-4 py-4">
                                        <Newspaper attr:class="h-6 w-6 text-primary shrink-0" />
                                        <div>
                                            <h3 class="font-semibold">{*nome}</h3>
                                            <p class="text-sm text-base-content/70">{*desc}</p>
                                        </div>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
