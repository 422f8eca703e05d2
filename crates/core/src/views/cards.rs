use folio_protocol::{Link, ProjectCard};

use crate::model::{Owner, ProjectCatalog};

/// One card per project, in catalog order.
pub fn project_cards(projects: &ProjectCatalog, owner: &Owner) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectCard {
            index,
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            tags: project.tags.clone(),
            repo: Link::external("GitHub", project.repo_url().unwrap_or(&owner.profile_url)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::Project;

    fn owner() -> Owner {
        Owner {
            name: "A".into(),
            headline: String::new(),
            email: "a@example.com".into(),
            profile_url: "https://example.com/a".into(),
        }
    }

    #[test]
    fn cards_keep_order_tags_and_index() {
        let projects = ProjectCatalog::new(vec![
            Project {
                title: "One".into(),
                description: "first".into(),
                image: "1.png".into(),
                tags: vec!["Python".into(), "Flask".into()],
                repo: Some("https://example.com/one".into()),
                demo: None,
            },
            Project {
                title: "Two".into(),
                description: "second".into(),
                image: "2.png".into(),
                tags: Vec::new(),
                repo: None,
                demo: None,
            },
        ])
        .unwrap();
        let cards = project_cards(&projects, &owner());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].index, 0);
        assert_eq!(cards[0].tags, ["Python", "Flask"]);
        assert_eq!(cards[0].repo.href, "https://example.com/one");
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[1].repo.href, "https://example.com/a");
        assert!(cards[1].repo.external);
    }

    #[test]
    fn empty_repo_links_to_profile() {
        let projects = ProjectCatalog::new(vec![Project {
            title: "Blank".into(),
            description: String::new(),
            image: "b.png".into(),
            tags: Vec::new(),
            repo: Some(String::new()),
            demo: None,
        }])
        .unwrap();
        let cards = project_cards(&projects, &owner());
        assert_eq!(cards[0].repo.href, "https://example.com/a");
    }
}
