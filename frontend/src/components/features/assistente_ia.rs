use crate::components::app_function::FunctionHeader;
use crate::components::icons::{Bot, Send, Sparkles};
use crate::web::Interval;
use leptos::prelude::*;
use std::time::Duration;

/// 打字动画速度（每字符毫秒数）
const TYPING_SPEED_MS: u32 = 30;
/// 模拟"思考"的延迟
const REPLY_DELAY: Duration = Duration::from_secs(1);

const GREETING: &str = "👋 Olá! Eu sou sua Assistente IA Jurídica. Posso ajudá-lo a:\n\n📖 Explicar conceitos jurídicos complexos\n📝 Resumir legislações e artigos\n🔍 Esclarecer dúvidas sobre direito\n📚 Orientar sobre estudos\n\nComo posso ajudá-lo hoje?";

/// 演示版固定回复：真实推理由后续版本接入
const CANNED_REPLY: &str = "Obrigada pela sua pergunta! 😊 Esta é uma versão demonstrativa. Em breve terei acesso completo para te ajudar com suas dúvidas jurídicas. Continue estudando! 📚✨";

#[derive(Clone, PartialEq)]
struct ChatMessage {
    id: usize,
    from_user: bool,
    content: String,
}

/// 聊天气泡
#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    let side = if message.from_user {
        "chat chat-end"
    } else {
        "chat chat-start"
    };
    let bubble = if message.from_user {
        "chat-bubble chat-bubble-primary whitespace-pre-line"
    } else {
        "chat-bubble whitespace-pre-line"
    };

    view! {
        <div class=side>
            <div class=bubble>{message.content}</div>
        </div>
    }
}

/// 脚本化的助手聊天
///
/// 回复是固定文案 + 逐字打字动画（Interval 驱动），
/// 不是推理引擎。
#[component]
pub fn AssistenteIa() -> impl IntoView {
    let (messages, set_messages) = signal(vec![ChatMessage {
        id: 0,
        from_user: false,
        content: GREETING.to_string(),
    }]);
    let (draft, set_draft) = signal(String::new());
    let (is_typing, set_is_typing) = signal(false);
    let (typing_buffer, set_typing_buffer) = signal(String::new());

    // 打字动画的底层定时器；在回调外部释放（见下方 Effect）
    let ticker: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    // 打字结束后清掉定时器。Effect 在 tick 之外运行，
    // 避免在回调内部 drop 正在执行的闭包。
    Effect::new(move |_| {
        if !is_typing.get() {
            ticker.set_value(None);
        }
    });

    let start_typing = move || {
        set_is_typing.set(true);
        set_typing_buffer.set(String::new());

        let interval = Interval::new(TYPING_SPEED_MS, move || {
            let shown = typing_buffer.with_untracked(|b| b.chars().count());
            match CANNED_REPLY.chars().nth(shown) {
                Some(c) => set_typing_buffer.update(|b| b.push(c)),
                None => {
                    // 动画完成：固化为正式消息
                    set_messages.update(|msgs| {
                        let id = msgs.len();
                        msgs.push(ChatMessage {
                            id,
                            from_user: false,
                            content: CANNED_REPLY.to_string(),
                        });
                    });
                    set_typing_buffer.set(String::new());
                    set_is_typing.set(false);
                }
            }
        });
        ticker.set_value(Some(interval));
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() || is_typing.get_untracked() {
            return;
        }

        set_messages.update(|msgs| {
            let id = msgs.len();
            msgs.push(ChatMessage {
                id,
                from_user: true,
                content: text,
            });
        });
        set_draft.set(String::new());

        set_timeout(move || start_typing(), REPLY_DELAY);
    };

    view! {
        <div class="fixed inset-0 bg-base-100 flex flex-col">
            <FunctionHeader title="Assistente IA Jurídica" />

            <div class="flex-1 overflow-y-auto pt-16 pb-4 px-4 max-w-2xl mx-auto w-full">
                <div class="flex items-center gap-2 justify-center py-2 text-base-content/50 text-sm">
                    <Sparkles attr:class="h-4 w-4" />
                    "Versão demonstrativa"
                </div>

                <For each=move || messages.get() key=|m| m.id children=move |m| view! { <Bubble message=m /> } />

                <Show when=move || is_typing.get()>
                    <div class="chat chat-start">
                        <div class="chat-bubble whitespace-pre-line">
                            {move || typing_buffer.get()}
                            <span class="animate-pulse">"▋"</span>
                        </div>
                    </div>
                </Show>
            </div>

            <form
                class="border-t border-base-300 p-3 flex gap-2 max-w-2xl mx-auto w-full"
                on:submit=on_submit
            >
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Bot attr:class="h-4 w-4 text-base-content/50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Digite sua dúvida jurídica..."
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class="btn btn-primary btn-square"
                    disabled=move || is_typing.get()
                >
                    <Send attr:class="h-5 w-5" />
                </button>
            </form>
        </div>
    }
}
