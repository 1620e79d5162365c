use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Outline of a person's head and shoulders.
#[function_component]
pub fn PersonIcon(props: &IconProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={props.class.clone()}
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"
            />
        </svg>
    }
}
