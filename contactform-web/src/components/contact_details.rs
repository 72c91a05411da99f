use leptos::*;

use super::icons::{
    FacebookIcon, GithubIcon, LinkedinIcon, MailIcon, PhoneIcon,
};
use crate::vars::{
    FACEBOOK_URL, GITHUB_URL, LINKEDIN_URL, OWNER_EMAIL, OWNER_PHONE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Facebook(&'static str),
    Linkedin(&'static str),
    Github(&'static str),
}

impl SocialLink {
    pub fn url(&self) -> &'static str {
        match self {
            SocialLink::Facebook(url)
            | SocialLink::Linkedin(url)
            | SocialLink::Github(url) => url,
        }
    }
}

/// Direct ways to reach the site owner, shown next to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub socials: Vec<SocialLink>,
}

impl ContactDetails {
    pub fn from_build_env() -> Self {
        let socials = [
            FACEBOOK_URL.map(SocialLink::Facebook),
            LINKEDIN_URL.map(SocialLink::Linkedin),
            GITHUB_URL.map(SocialLink::Github),
        ];
        ContactDetails {
            email: OWNER_EMAIL,
            phone: OWNER_PHONE,
            socials: socials.into_iter().flatten().collect(),
        }
    }
}

#[component]
pub fn ContactDetailsView(details: ContactDetails) -> impl IntoView {
    let socials = details.socials;

    view! {
        <h2 class="text-4xl md:text-5xl font-bold mb-6 tracking-tight">
            "Get in Touch"
        </h2>
        <p class="text-lg text-slate-300">
            "Feel free to reach out via the form or directly through my contact details."
        </p>
        <div class="space-y-4">
            {details.email.map(|email| view! {
                <div class="flex items-center space-x-3">
                    <MailIcon/>
                    <a href=format!("mailto:{}", email) class="text-slate-200">{email}</a>
                </div>
            })}
            {details.phone.map(|phone| view! {
                <div class="flex items-center space-x-3">
                    <PhoneIcon/>
                    <span class="text-slate-200">{phone}</span>
                </div>
            })}
            <div class="flex space-x-4 mt-6">
                {socials.into_iter().map(|link| view! {
                    <a href=link.url() target="_blank" rel="noreferrer">
                        {match link {
                            SocialLink::Facebook(_) => view! { <FacebookIcon/> }.into_view(),
                            SocialLink::Linkedin(_) => view! { <LinkedinIcon/> }.into_view(),
                            SocialLink::Github(_) => view! { <GithubIcon/> }.into_view(),
                        }}
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
