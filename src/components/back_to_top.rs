use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::Navigation;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let navigation = use_context::<Navigation>();
    let Some(navigation) = navigation else {
        return html! {};
    };

    if !navigation.snapshot().show_back_to_top {
        return html! {};
    }

    let onclick = {
        let navigation = navigation.clone();
        Callback::from(move |_: MouseEvent| navigation.go_to_top())
    };

    html! {
        <button class="back-to-top" {onclick} aria-label="Back to top">
            {"↑"}
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 40;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 9999px;
                    color: white;
                    font-size: 1.5rem;
                    cursor: pointer;
                    background: #0F2A44;
                    box-shadow: 0 20px 40px rgba(15, 42, 68, 0.3);
                    animation: popIn 0.3s ease-out;
                    transition: background 0.3s ease, transform 0.2s ease;
                }
                .back-to-top:hover {
                    background: #1E3A8A;
                    transform: scale(1.1);
                }
                @keyframes popIn {
                    from { opacity: 0; transform: scale(0); }
                    to { opacity: 1; transform: scale(1); }
                }
                "#}
            </style>
        </button>
    }
}
