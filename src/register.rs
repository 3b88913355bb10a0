use crate::{IconRegistry, RejectReason, Rule, RuleClass, RuleDraft, ZoomRange};

/// Validate a draft and turn it into an immutable rule with the given priority.
pub(crate) fn validate(
    class: RuleClass,
    draft: RuleDraft,
    icons: &impl IconRegistry,
    priority: u32,
) -> Result<Rule, RejectReason> {
    let zoom = check_zoom(class, &draft)?;
    let icon = if class == RuleClass::Point {
        Some(check_icon(&draft, icons)?)
    } else {
        None
    };

    let RuleDraft {
        tag,
        value,
        layer,
        icon_name,
        shader_name,
        main,
        overlay_1,
        overlay_2,
        text,
        ..
    } = draft;

    Ok(Rule {
        tag,
        value,
        zoom,
        layer,
        icon_name,
        icon,
        shader_name,
        main,
        overlay_1,
        overlay_2,
        text,
        priority,
    })
}

fn check_zoom(class: RuleClass, draft: &RuleDraft) -> Result<ZoomRange, RejectReason> {
    let min = draft.min_zoom.ok_or_else(|| RejectReason::MissingMinZoom {
        class,
        tag: draft.tag.clone(),
    })?;
    Ok(ZoomRange::new(min, draft.max_zoom))
}

fn check_icon(
    draft: &RuleDraft,
    icons: &impl IconRegistry,
) -> Result<crate::IconId, RejectReason> {
    let name = draft
        .icon_name
        .as_deref()
        .ok_or_else(|| RejectReason::MissingIcon {
            tag: draft.tag.clone(),
        })?;
    icons
        .lookup(name)
        .ok_or_else(|| RejectReason::UnresolvedIcon {
            tag: draft.tag.clone(),
            icon: name.to_owned(),
        })
}
