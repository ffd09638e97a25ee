//! Static site content. The portfolio has no data store; the gallery and
//! blog listings ship with the binary and change through deployments.

use once_cell::sync::Lazy;

use crate::entities::{
    blog_post::BlogPost,
    project::{MediaType, Project},
};

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: "1",
            title: "Cultural Poster",
            category: "posters",
            featured: true,
            media_type: MediaType::Image,
            image: Some("/images/kannan.png"),
            video_id: None,
        },
        Project {
            id: "2",
            title: "Business Branding",
            category: "posters",
            featured: true,
            media_type: MediaType::Image,
            image: Some("/images/kannan3.jpeg"),
            video_id: None,
        },
        Project {
            id: "3",
            title: "Car Design",
            category: "design",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "4",
            title: "Kannan VFX 2",
            category: "posters",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "5",
            title: "Ethereal Landscapes",
            category: "vfx",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "6",
            title: "Retro Revival",
            category: "posters",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "7",
            title: "Particle Symphony",
            category: "motion",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "8",
            title: "Cybernetic Dreams",
            category: "vfx",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "9",
            title: "Minimal Expressions",
            category: "posters",
            featured: false,
            media_type: MediaType::Image,
            image: Some("/placeholder.svg?height=450&width=600"),
            video_id: None,
        },
        Project {
            id: "10",
            title: "VFX Demo Reel",
            category: "vfx",
            featured: true,
            media_type: MediaType::Youtube,
            image: None,
            video_id: Some("AhDD4c4B9u4"),
        },
        Project {
            id: "11",
            title: "VFemo",
            category: "vfx",
            featured: true,
            media_type: MediaType::Youtube,
            image: None,
            video_id: Some("KBNey4upFKE"),
        },
        Project {
            id: "12",
            title: "VFXo",
            category: "vfx",
            featured: true,
            media_type: MediaType::Youtube,
            image: None,
            video_id: Some("ilL7RQIYxuQ"),
        },
        Project {
            id: "13",
            title: "Vmo Reel",
            category: "vfx",
            featured: true,
            media_type: MediaType::Youtube,
            image: None,
            video_id: Some("AhDD4c4B9u4"),
        },
    ]
});

static POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    vec![
        BlogPost {
            id: 1,
            title: "The Art of Visual Storytelling in Modern Design",
            excerpt: "Explore how visual storytelling has evolved in contemporary design and its impact on user engagement.",
            category: "Design",
            date: "March 15, 2024",
            read_time: "5 min read",
            image: "/placeholder.svg?height=400&width=600",
            tags: &["Design", "Storytelling", "UI/UX"],
        },
        BlogPost {
            id: 2,
            title: "Mastering Color Theory in Digital Art",
            excerpt: "A comprehensive guide to understanding and applying color theory in digital art and design.",
            category: "Art",
            date: "March 10, 2024",
            read_time: "7 min read",
            image: "/placeholder.svg?height=400&width=600",
            tags: &["Color Theory", "Digital Art", "Design"],
        },
        BlogPost {
            id: 3,
            title: "The Future of Motion Design",
            excerpt: "Discover emerging trends and technologies shaping the future of motion design and animation.",
            category: "Animation",
            date: "March 5, 2024",
            read_time: "6 min read",
            image: "/placeholder.svg?height=400&width=600",
            tags: &["Motion Design", "Animation", "Future Trends"],
        },
    ]
});

pub fn projects(category: Option<&str>, featured: Option<bool>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category.eq_ignore_ascii_case(c)))
        .filter(|p| featured.is_none_or(|f| p.featured == f))
        .collect()
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn posts(category: Option<&str>, limit: usize) -> Vec<&'static BlogPost> {
    POSTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category.eq_ignore_ascii_case(c)))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_is_exclusive() {
        let posters = projects(Some("posters"), None);
        assert!(!posters.is_empty());
        assert!(posters.iter().all(|p| p.category == "posters"));
    }

    #[test]
    fn featured_filter_applies_on_top_of_category() {
        let featured_vfx = projects(Some("vfx"), Some(true));
        assert!(featured_vfx.iter().all(|p| p.featured && p.category == "vfx"));
    }

    #[test]
    fn video_entries_have_ids_instead_of_images() {
        for project in projects(None, None) {
            match project.media_type {
                MediaType::Image => assert!(project.image.is_some()),
                MediaType::Youtube => assert!(project.video_id.is_some()),
            }
        }
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        assert!(project_by_id("1").is_some());
        assert!(project_by_id("no-such-id").is_none());
    }

    #[test]
    fn post_limit_caps_results() {
        assert_eq!(posts(None, 2).len(), 2);
        assert_eq!(posts(Some("Design"), 10).len(), 1);
    }
}
