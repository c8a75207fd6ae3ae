use plutchik::{
    Catalog, Color, EmotionId, EmotionKind, EmotionRecord, NotFoundError, Section, Variant,
};
use strum::IntoEnumIterator;

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub visible: bool,
    pub text: String,
}

/// A button that jumps to another emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub color: Color,
    pub target: EmotionId,
}

impl ButtonView {
    fn to(catalog: &Catalog, id: &EmotionId) -> Result<Self, NotFoundError> {
        let record = catalog.get(id)?;
        Ok(Self {
            label: capitalize(&record.display_name),
            color: record.color(),
            target: record.id.clone(),
        })
    }
}

/// Intensity arrow; disabled arrows are painted in the configured grey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowView {
    pub enabled: bool,
    pub color: Color,
}

impl ArrowView {
    fn to(
        catalog: &Catalog,
        id: Option<&EmotionId>,
        disabled_color: Color,
    ) -> Result<Self, NotFoundError> {
        Ok(match id {
            Some(id) => Self {
                enabled: true,
                color: catalog.get(id)?.color(),
            },
            None => Self {
                enabled: false,
                color: disabled_color,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Base {
        intensity_label: String,
        opposite: ButtonView,
        increase: ArrowView,
        decrease: ArrowView,
    },
    Intermediate {
        components: [ButtonView; 2],
        explanation: String,
    },
}

/// Everything a renderer needs to draw the panel for one emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    pub id: EmotionId,
    pub title: String,
    pub title_color: Color,
    pub sections: Vec<SectionView>,
    pub panel: PanelView,
}

impl RenderInstruction {
    pub fn build(
        catalog: &Catalog,
        record: &EmotionRecord,
        disabled_color: Color,
    ) -> Result<Self, NotFoundError> {
        let sections = Section::iter()
            .map(|section| {
                let text = record.section(section);
                SectionView {
                    section,
                    visible: text.is_some(),
                    text: text.unwrap_or_default().to_string(),
                }
            })
            .collect();

        let panel = match &record.kind {
            EmotionKind::Base(base) => PanelView::Base {
                intensity_label: base.intensity.clone(),
                opposite: ButtonView::to(catalog, &base.opposite)?,
                increase: ArrowView::to(catalog, base.more_intense.as_ref(), disabled_color)?,
                decrease: ArrowView::to(catalog, base.less_intense.as_ref(), disabled_color)?,
            },
            EmotionKind::Intermediate(blend) => PanelView::Intermediate {
                components: [
                    ButtonView::to(catalog, &blend.components[0])?,
                    ButtonView::to(catalog, &blend.components[1])?,
                ],
                explanation: blend.explanation.clone(),
            },
        };

        Ok(Self {
            id: record.id.clone(),
            title: capitalize(&record.display_name),
            title_color: record.title_color(),
            sections,
            panel,
        })
    }

    pub fn variant(&self) -> Variant {
        match self.panel {
            PanelView::Base { .. } => Variant::Base,
            PanelView::Intermediate { .. } => Variant::Intermediate,
        }
    }

    pub fn section(&self, section: Section) -> &SectionView {
        &self.sections[section.as_index()]
    }
}
