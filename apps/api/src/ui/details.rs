//! Categorized feedback breakdown: four fixed collapsible sections, each with
//! a score badge and a two-part rendering of its tips (compact grid of short
//! labels, then full-width explanation blocks styled by tip type).

use leptos::prelude::*;

use crate::models::feedback::{Feedback, Tip, TipKind};
use crate::report::tier::BadgeTier;
use crate::ui::accordion::{Accordion, AccordionContent, AccordionHeader, AccordionItem};
use crate::ui::classes::cn;
use crate::ui::icons::{CheckGlyph, WarningGlyph};

#[component]
fn ScoreBadge(score: u32) -> impl IntoView {
    let tier = BadgeTier::classify(score);
    let glyph = tier
        .shows_check()
        .then(|| view! { <CheckGlyph class="w-4 h-4 mr-1" /> });

    view! {
        <div class=cn(&["flex items-center px-2 py-1 rounded-md", tier.bg_class()])>
            {glyph}
            <span class=cn(&["text-sm font-medium", tier.text_class()])>
                {format!("{score}/100")}
            </span>
        </div>
    }
}

#[component]
fn CategoryHeader(#[prop(into)] title: String, category_score: u32) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between w-full">
            <h3 class="text-lg font-medium">{title}</h3>
            <ScoreBadge score=category_score />
        </div>
    }
}

/// Renders the same tip sequence twice, preserving order both times: the
/// compact two-column grid of short labels, then the explanation list.
#[component]
fn CategoryContent(tips: Vec<Tip>) -> impl IntoView {
    let explanations = tips.clone();

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                {tips
                    .into_iter()
                    .map(|tip| {
                        let glyph = match tip.kind {
                            TipKind::Good => {
                                view! { <CheckGlyph class="w-5 h-5 mt-0.5 mr-2 text-green-500" /> }
                                    .into_any()
                            }
                            TipKind::Improve => {
                                view! { <WarningGlyph class="w-5 h-5 mt-0.5 mr-2 text-yellow-500" /> }
                                    .into_any()
                            }
                        };
                        view! {
                            <div class="flex items-start">
                                {glyph}
                                <span class="text-sm">{tip.tip}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-3">
                {explanations
                    .into_iter()
                    .map(|tip| {
                        let tone = match tip.kind {
                            TipKind::Good => "bg-green-50 border border-green-100 text-green-800",
                            TipKind::Improve => "bg-yellow-50 border border-yellow-100 text-yellow-800",
                        };
                        view! {
                            <div class=cn(&["p-3 rounded-md text-sm", tone])>
                                <p>{tip.explanation.unwrap_or_default()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Details(feedback: Feedback) -> impl IntoView {
    let Feedback {
        tone_and_style,
        content,
        structure,
        skills,
    } = feedback;

    view! {
        <Accordion>
            <AccordionItem id="tone-and-style">
                <AccordionHeader item_id="tone-and-style">
                    <CategoryHeader title="Tone and Style" category_score=tone_and_style.score />
                </AccordionHeader>
                <AccordionContent item_id="tone-and-style">
                    <CategoryContent tips=tone_and_style.tips />
                </AccordionContent>
            </AccordionItem>

            <AccordionItem id="content">
                <AccordionHeader item_id="content">
                    <CategoryHeader title="Content" category_score=content.score />
                </AccordionHeader>
                <AccordionContent item_id="content">
                    <CategoryContent tips=content.tips />
                </AccordionContent>
            </AccordionItem>

            <AccordionItem id="structure">
                <AccordionHeader item_id="structure">
                    <CategoryHeader title="Structure" category_score=structure.score />
                </AccordionHeader>
                <AccordionContent item_id="structure">
                    <CategoryContent tips=structure.tips />
                </AccordionContent>
            </AccordionItem>

            <AccordionItem id="skills">
                <AccordionHeader item_id="skills">
                    <CategoryHeader title="Skills" category_score=skills.score />
                </AccordionHeader>
                <AccordionContent item_id="skills">
                    <CategoryContent tips=skills.tips />
                </AccordionContent>
            </AccordionItem>
        </Accordion>
    }
}
