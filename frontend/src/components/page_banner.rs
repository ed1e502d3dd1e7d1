use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageBannerProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Dark header strip shown at the top of every inner page.
#[function_component(PageBanner)]
pub fn page_banner(props: &PageBannerProps) -> Html {
    html! {
        <div class="page-banner">
            <div class="page-banner-overlay"></div>
            <div class="page-banner-content">
                <h1 class="enter-down">{props.title.clone()}</h1>
                <div class="section-rule grow"></div>
                if let Some(subtitle) = &props.subtitle {
                    <p class="enter-fade" style="animation-delay: 500ms;">{subtitle.clone()}</p>
                }
            </div>
            <style>
                {r#"
                .page-banner {
                    position: relative;
                    height: 20rem;
                    background: var(--cafe-dark-brown);
                }

                .page-banner-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                }

                .page-banner-content {
                    position: relative;
                    z-index: 1;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 1rem;
                }

                .page-banner h1 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .page-banner p {
                    color: var(--cafe-cream);
                    margin-top: 1rem;
                    max-width: 40rem;
                }

                @media (max-width: 767px) {
                    .page-banner {
                        height: 16rem;
                    }

                    .page-banner h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
