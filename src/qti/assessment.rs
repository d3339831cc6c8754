//! QTI 1.2 assessment document.

use crate::markdown::render_fragment;
use crate::model::Question;

use super::ident::IdGenerator;
use super::tree::Element;

pub const QTI_NAMESPACE: &str = "http://www.imsglobal.org/xsd/ims_qtiasiv1p2";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const QTI_SCHEMA_LOCATION: &str = "http://www.imsglobal.org/xsd/ims_qtiasiv1p2 http://www.imsglobal.org/xsd/ims_qtiasiv1p2p1.xsd";

/// Identifier of the single response group in every item.
pub const RESPONSE_IDENT: &str = "response1";
/// Name of the item score variable.
pub const SCORE_VAR: &str = "SCORE";
/// Score awarded for the correct answer.
pub const MAX_SCORE: &str = "100";

/// Build the `questestinterop` tree for an exam.
///
/// Items follow question order. `ids` supplies two identifiers per item:
/// the item ident and its metadata cross-reference.
pub fn build_assessment(
    questions: &[Question],
    title: &str,
    assessment_id: &str,
    ids: &mut impl IdGenerator,
) -> Element {
    let section = Element::new("section")
        .attr("ident", "root_section")
        .children(questions.iter().map(|q| build_item(q, ids)));

    let assessment = Element::new("assessment")
        .attr("ident", assessment_id)
        .attr("title", title)
        .child(
            Element::new("qtimetadata")
                .child(metadata_field("qmd_timelimit", ""))
                .child(metadata_field("cc_maxattempts", "1")),
        )
        .child(section);

    Element::new("questestinterop")
        .attr("xmlns", QTI_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .attr("xsi:schemaLocation", QTI_SCHEMA_LOCATION)
        .child(assessment)
}

/// Response identifier for one choice of an item.
pub fn answer_id(item_id: &str, letter: char) -> String {
    format!("{item_id}_{letter}")
}

/// Build one `item` element for a question.
pub fn build_item(question: &Question, ids: &mut impl IdGenerator) -> Element {
    let item_id = ids.next_id();
    let identifier_ref = ids.next_id();
    tracing::debug!(number = question.number, %item_id, "assigned item identifier");

    let answer_ids = question
        .choices
        .iter()
        .map(|c| answer_id(&item_id, c.letter))
        .collect::<Vec<_>>()
        .join(",");

    let metadata = Element::new("itemmetadata").child(
        Element::new("qtimetadata")
            .child(metadata_field("question_type", "multiple_choice_question"))
            .child(metadata_field("points_possible", "1"))
            .child(metadata_field("original_answer_ids", answer_ids))
            .child(metadata_field("assessment_question_identifierref", identifier_ref)),
    );

    let labels = question.choices.iter().map(|choice| {
        Element::new("response_label")
            .attr("ident", answer_id(&item_id, choice.letter))
            .child(html_material(&choice.text))
    });

    let presentation = Element::new("presentation")
        .child(html_material(&question.stem))
        .child(
            Element::new("response_lid")
                .attr("ident", RESPONSE_IDENT)
                .attr("rcardinality", "Single")
                .child(Element::new("render_choice").children(labels)),
        );

    let mut resprocessing = Element::new("resprocessing").child(
        Element::new("outcomes").child(
            Element::new("decvar")
                .attr("maxvalue", MAX_SCORE)
                .attr("minvalue", "0")
                .attr("varname", SCORE_VAR)
                .attr("vartype", "Decimal"),
        ),
    );
    if let Some(letter) = question.correct_answer {
        resprocessing = resprocessing.child(scoring_condition(&answer_id(&item_id, letter)));
    }

    Element::new("item")
        .attr("ident", item_id)
        .attr("title", format!("Question {}", question.number))
        .child(metadata)
        .child(presentation)
        .child(resprocessing)
}

/// Full score when the response equals `correct_id`.
fn scoring_condition(correct_id: &str) -> Element {
    Element::new("respcondition")
        .attr("continue", "No")
        .child(
            Element::new("conditionvar").child(
                Element::new("varequal")
                    .attr("respident", RESPONSE_IDENT)
                    .text(correct_id),
            ),
        )
        .child(
            Element::new("setvar")
                .attr("action", "Set")
                .attr("varname", SCORE_VAR)
                .text(MAX_SCORE),
        )
}

fn html_material(markdown: &str) -> Element {
    Element::new("material").child(
        Element::new("mattext")
            .attr("texttype", "text/html")
            .text(render_fragment(markdown)),
    )
}

fn metadata_field(label: &str, value: impl Into<String>) -> Element {
    Element::new("qtimetadatafield")
        .child(Element::new("fieldlabel").text(label))
        .child(Element::new("fieldentry").text(value))
}
