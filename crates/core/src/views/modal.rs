use folio_protocol::{Link, ModalState, ModalView};

use crate::model::Owner;

/// Contents of the project modal, or `None` while it is closed.
///
/// Projects without a live demo get a "Request Code" mail link to the
/// owner instead; projects without a repository link to the owner's
/// profile.
pub fn modal_view(modal: &ModalState, owner: &Owner) -> Option<ModalView> {
    let project = modal.project()?;
    let primary = match project.demo.as_deref() {
        Some(demo) if project.has_demo() => Link::external("Live Demo", demo),
        _ => Link::internal("Request Code", owner.mailto()),
    };
    Some(ModalView {
        title: project.title.clone(),
        description: project.description.clone(),
        image: project.image.clone(),
        image_alt: format!("{} screenshot", project.title),
        tags: project.tags.clone(),
        primary,
        repo: Link::external("GitHub", project.repo_url().unwrap_or(&owner.profile_url)),
    })
}
