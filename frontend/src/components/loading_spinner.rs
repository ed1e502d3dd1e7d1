use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
    /// Fill the viewport instead of the parent box.
    #[prop_or_default]
    pub full_screen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class={classes!("loading-spinner", props.full_screen.then(|| "full-screen"))}>
            <div class="loading-spinner-inner">
                <div class="spinner-ring"></div>
                <p>{props.label.clone()}</p>
            </div>
            <style>
                {r#"
                .loading-spinner {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    height: 100%;
                    background: #e5e7eb;
                }

                .loading-spinner.full-screen {
                    height: 100vh;
                    background: var(--cafe-cream);
                }

                .loading-spinner-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    animation: spinner-fade 0.3s ease-out;
                }

                .spinner-ring {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: 3px solid var(--cafe-gold);
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spinner-rotate 1s linear infinite;
                }

                .full-screen .spinner-ring {
                    width: 4rem;
                    height: 4rem;
                    border-width: 4px;
                }

                .loading-spinner p {
                    color: var(--cafe-brown);
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                @keyframes spinner-rotate {
                    to { transform: rotate(360deg); }
                }

                @keyframes spinner-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
