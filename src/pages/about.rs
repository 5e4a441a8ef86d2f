//! About page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::Section;
use crate::config::Profile;

/// Generates about page with profile image and social links
///
/// Links without a configured URL are omitted.
pub fn generate(profile: &Profile) -> Markup {
    page_wrapper(
        "About",
        Some(Section::About),
        html! {
            section class="profile" {
                @if let Some(image) = &profile.profile_image {
                    img src=(image) alt=(profile.author) class="profile-image";
                }
                div {
                    h1 { (profile.author) }
                    p {
                        "Software engineer writing about what I build, where I go, "
                        "and what I learn along the way."
                    }
                    div class="social-links" {
                        @if let Some(url) = &profile.github_url {
                            a href=(url) target="_blank" rel="noopener" {
                                i class="ph ph-github-logo" {} " GitHub"
                            }
                        }
                        @if let Some(url) = &profile.linkedin_url {
                            a href=(url) target="_blank" rel="noopener" {
                                i class="ph ph-linkedin-logo" {} " LinkedIn"
                            }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_omits_missing_links() {
        // Arrange
        let profile = Profile {
            author: "Ada".to_string(),
            github_url: Some("https://github.com/ada".to_string()),
            ..Profile::default()
        };

        // Act
        let html = generate(&profile).into_string();

        // Assert
        assert!(html.contains("https://github.com/ada"));
        assert!(!html.contains("LinkedIn"));
        assert!(!html.contains("profile-image"));
    }
}
