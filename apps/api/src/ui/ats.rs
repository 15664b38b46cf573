//! Overall ATS compatibility panel: tier-colored header, fixed copy, and the
//! ordered suggestion list.

use leptos::prelude::*;

use crate::models::feedback::{Suggestion, TipKind};
use crate::report::tier::PanelTier;
use crate::ui::classes::cn;
use crate::ui::icons::{CHECK_ICON, WARNING_ICON};

#[component]
pub fn AtsScore(score: u32, suggestions: Vec<Suggestion>) -> impl IntoView {
    let tier = PanelTier::classify(score);

    view! {
        <div class=cn(&[
            "bg-gradient-to-br",
            tier.gradient_class(),
            "to-white rounded-2xl shadow-md p-6 w-full",
        ])>
            <div class="flex items-center gap-4 mb-4">
                <img src=tier.icon() alt="ATS Score Icon" class="w-12 h-12" />
                <h2 class="text-2xl font-bold">{format!("ATS Score – {score}/100")}</h2>
            </div>

            <div class="mb-6">
                <h3 class="text-lg font-semibold mb-2">"Applicant Tracking System Compatibility"</h3>
                <p class="text-gray-600 mb-4">
                    "This score indicates how well your resume will perform when processed by Applicant Tracking Systems used by employers."
                </p>

                <ul class="space-y-3">
                    {suggestions
                        .into_iter()
                        .map(|suggestion| {
                            let (icon, alt) = match suggestion.kind {
                                TipKind::Good => (CHECK_ICON, "Check"),
                                TipKind::Improve => (WARNING_ICON, "Warning"),
                            };
                            view! {
                                <li class="flex items-start gap-2">
                                    <img src=icon alt=alt class="w-5 h-5 mt-0.5" />
                                    <span>{suggestion.tip}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <p class="text-sm text-gray-700 italic">
                "Improving your ATS compatibility can significantly increase your chances of getting an interview."
            </p>
        </div>
    }
}
