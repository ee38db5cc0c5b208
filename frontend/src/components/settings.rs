//! 用户设置对话框
//!
//! 账号管理：编辑 `perfis` 里的显示名、从设置里注销。
//! 保存成功后同步更新内存中的认证状态，界面即时反映新名字。

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Save, User, X};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 名称是否可保存：非空白且与当前值确实不同
fn can_save(novo: &str, atual: Option<&str>) -> bool {
    let novo = novo.trim();
    !novo.is_empty() && Some(novo) != atual.map(str::trim)
}

#[component]
pub fn UserSettings(set_open: WriteSignal<bool>) -> impl IntoView {
    let auth = use_auth();

    let profile = auth.state.get_untracked().profile;
    let email = profile.as_ref().map(|p| p.email.clone()).unwrap_or_default();
    let initial_name = profile
        .and_then(|p| p.nome_completo)
        .unwrap_or_default();

    let (nome, set_nome) = signal(initial_name);
    let (saving, set_saving) = signal(false);
    let (feedback, set_feedback) = signal(None::<Result<String, String>>);

    let save_disabled = move || {
        saving.get() || {
            let state = auth.state.get();
            let atual = state
                .profile
                .as_ref()
                .and_then(|p| p.nome_completo.as_deref());
            !can_save(&nome.get(), atual)
        }
    };

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let state = auth.state.get_untracked();
        let (Some(api), Some(profile)) = (state.api.clone(), state.profile.clone()) else {
            return;
        };
        let novo = nome.get_untracked().trim().to_string();
        if !can_save(&novo, profile.nome_completo.as_deref()) {
            return;
        }

        set_saving.set(true);
        set_feedback.set(None);

        spawn_local(async move {
            match api.update_profile_name(&profile.id, &novo).await {
                Ok(()) => {
                    auth.set_state.update(|s| {
                        if let Some(p) = s.profile.as_mut() {
                            p.nome_completo = Some(novo.clone());
                        }
                    });
                    set_feedback.set(Some(Ok("Nome atualizado!".to_string())));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Settings] falha ao salvar: {}", e).into());
                    set_feedback
                        .set(Some(Err("Não foi possível atualizar seu nome.".to_string())));
                }
            }
            set_saving.set(false);
        });
    };

    let on_sign_out = move |_| {
        logout(&auth);
        set_open.set(false);
    };

    view! {
        <div class="modal modal-open">
            <div class="modal-box space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg flex items-center gap-2">
                        <User attr:class="h-5 w-5" />
                        "Configurações"
                    </h3>
                    <button
                        class="btn btn-ghost btn-sm btn-square"
                        on:click=move |_| set_open.set(false)
                    >
                        <X attr:class="h-4 w-4" />
                    </button>
                </div>
                <p class="text-sm text-base-content/70">"Gerencie sua conta e preferências"</p>

                <label class="form-control w-full">
                    <span class="label-text mb-1">"Email"</span>
                    <input
                        type="email"
                        class="input input-bordered w-full"
                        prop:value=email
                        disabled=true
                    />
                </label>

                <label class="form-control w-full">
                    <span class="label-text mb-1">"Nome Completo"</span>
                    <input
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="Seu nome completo"
                        prop:value=nome
                        on:input=move |ev| set_nome.set(event_target_value(&ev))
                    />
                </label>

                {move || {
                    feedback
                        .get()
                        .map(|result| match result {
                            Ok(msg) => {
                                view! { <div class="alert alert-success text-sm">{msg}</div> }
                                    .into_any()
                            }
                            Err(msg) => {
                                view! { <div class="alert alert-error text-sm">{msg}</div> }
                                    .into_any()
                            }
                        })
                }}

                <button class="btn btn-primary btn-block" disabled=save_disabled on:click=on_save>
                    <Show
                        when=move || !saving.get()
                        fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                    >
                        <Save attr:class="h-4 w-4" />
                        "Salvar Alterações"
                    </Show>
                </button>

                <div class="border-t border-base-300 pt-4">
                    <button class="btn btn-outline btn-error btn-block" on:click=on_sign_out>
                        <LogOut attr:class="h-4 w-4" />
                        "Sair da Conta"
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" on:click=move |_| set_open.set(false)></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_save_requires_real_change() {
        assert!(can_save("Ana Souza", None));
        assert!(can_save("Ana Souza", Some("Ana")));
        assert!(!can_save("   ", None));
        assert!(!can_save("", Some("Ana")));
        assert!(!can_save("Ana Souza", Some("Ana Souza")));
        assert!(!can_save("  Ana Souza  ", Some("Ana Souza")));
    }
}
