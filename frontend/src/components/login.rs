//! 登录 / 注册页
//!
//! 客户端先做基础校验，失败的请求把 Supabase 的错误信息
//! 原样展示。登录成功后的跳转由路由服务的认证 Effect 负责，
//! 这里不做手动导航。

use crate::auth::{sign_in, sign_up, use_auth};
use crate::components::icons::Scale;
use jusestudo_shared::ProfileType;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    SignIn,
    SignUp,
}

/// 提交前的客户端校验
fn validate(
    tab: Tab,
    email: &str,
    password: &str,
    nome: &str,
    profile: Option<ProfileType>,
) -> Result<(), String> {
    if !email.contains('@') || !email.contains('.') {
        return Err("Email inválido".to_string());
    }
    if password.chars().count() < 6 {
        return Err("Senha deve ter pelo menos 6 caracteres".to_string());
    }
    if tab == Tab::SignUp {
        if nome.trim().chars().count() < 2 {
            return Err("Nome deve ter pelo menos 2 caracteres".to_string());
        }
        if profile.is_none() {
            return Err("Selecione seu foco de estudos".to_string());
        }
    }
    Ok(())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();

    let (tab, set_tab) = signal(Tab::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (nome, set_nome) = signal(String::new());
    let (profile, set_profile) = signal(None::<ProfileType>);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let switch_tab = move |t: Tab| {
        set_tab.set(t);
        set_error.set(None);
        set_notice.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let current = tab.get_untracked();
        let email_v = email.get_untracked();
        let password_v = password.get_untracked();
        let nome_v = nome.get_untracked();
        let profile_v = profile.get_untracked();

        if let Err(msg) = validate(current, &email_v, &password_v, &nome_v, profile_v) {
            set_error.set(Some(msg));
            return;
        }

        set_error.set(None);
        set_notice.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = match current {
                Tab::SignIn => sign_in(&auth, email_v, password_v).await,
                Tab::SignUp => {
                    // validate 已保证 profile 存在
                    let Some(p) = profile_v else {
                        set_submitting.set(false);
                        return;
                    };
                    match sign_up(email_v, password_v, nome_v, p).await {
                        Ok(()) => {
                            set_notice.set(Some(
                                "Cadastro realizado! Verifique seu email para confirmar a conta."
                                    .to_string(),
                            ));
                            set_tab.set(Tab::SignIn);
                            Ok(())
                        }
                        Err(e) => Err(e),
                    }
                }
            };

            if let Err(e) = result {
                web_sys::console::error_1(&format!("[Auth] falha: {}", e).into());
                set_error.set(Some(e));
            }
            set_submitting.set(false);
        });
    };

    let tab_class = move |t: Tab| {
        if tab.get() == t {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body">
                    <div class="flex flex-col items-center gap-2 mb-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Scale attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-2xl font-bold">"JusEstudo"</h1>
                        <p class="text-sm text-base-content/70">
                            "Sua plataforma de estudos jurídicos"
                        </p>
                    </div>

                    <div role="tablist" class="tabs tabs-boxed mb-4">
                        <a role="tab" class=move || tab_class(Tab::SignIn) on:click=move |_| switch_tab(Tab::SignIn)>
                            "Entrar"
                        </a>
                        <a role="tab" class=move || tab_class(Tab::SignUp) on:click=move |_| switch_tab(Tab::SignUp)>
                            "Criar conta"
                        </a>
                    </div>

                    <Show when=move || notice.get().is_some()>
                        <div class="alert alert-success text-sm mb-2">
                            {move || notice.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <div class="alert alert-error text-sm mb-2">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form class="space-y-3" on:submit=on_submit>
                        <Show when=move || tab.get() == Tab::SignUp>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Nome completo"
                                prop:value=nome
                                on:input=move |ev| set_nome.set(event_target_value(&ev))
                            />
                        </Show>

                        <input
                            type="email"
                            class="input input-bordered w-full"
                            placeholder="Email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            class="input input-bordered w-full"
                            placeholder="Senha"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        <Show when=move || tab.get() == Tab::SignUp>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    set_profile.set(ProfileType::from_key(&event_target_value(&ev)));
                                }
                            >
                                <option value="" selected=move || profile.get().is_none()>
                                    "Qual é o seu foco de estudos?"
                                </option>
                                {ProfileType::ALL
                                    .iter()
                                    .map(|p| {
                                        let p = *p;
                                        view! {
                                            <option
                                                value=p.as_str()
                                                selected=move || profile.get() == Some(p)
                                            >
                                                {p.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </Show>

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled=move || submitting.get()
                        >
                            <Show
                                when=move || !submitting.get()
                                fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                            >
                                {move || match tab.get() {
                                    Tab::SignIn => "Entrar",
                                    Tab::SignUp => "Criar conta",
                                }}
                            </Show>
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
