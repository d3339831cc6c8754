//! IMS content package manifest (`imsmanifest.xml`).

use super::tree::Element;

pub const MANIFEST_FILE: &str = "imsmanifest.xml";

const IMSCP_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsccv1p1/imscp_v1p1";
const LOM_NAMESPACE: &str = "http://ltsc.ieee.org/xsd/imsccv1p1/LOM/resource";
const IMSMD_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsmd_v1p2";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Resource type for a QTI 1.2 item bank.
pub const QTI_RESOURCE_TYPE: &str = "imsqti_xmlv1p2";

/// Archive path of the assessment document: `{id}/{id}.xml`.
pub fn assessment_path(assessment_id: &str) -> String {
    format!("{assessment_id}/{assessment_id}.xml")
}

/// Build the manifest tree declaring the single assessment resource.
pub fn build_manifest(assessment_id: &str) -> Element {
    let href = assessment_path(assessment_id);

    Element::new("manifest")
        .attr("identifier", format!("manifest_{assessment_id}"))
        .attr("xmlns", IMSCP_NAMESPACE)
        .attr("xmlns:lom", LOM_NAMESPACE)
        .attr("xmlns:imsmd", IMSMD_NAMESPACE)
        .attr("xmlns:xsi", XSI_NAMESPACE)
        .child(
            Element::new("metadata")
                .child(Element::new("schema").text("IMS Content"))
                .child(Element::new("schemaversion").text("1.1.3")),
        )
        .child(Element::new("organizations"))
        .child(
            Element::new("resources").child(
                Element::new("resource")
                    .attr("identifier", assessment_id)
                    .attr("type", QTI_RESOURCE_TYPE)
                    .attr("href", href.as_str())
                    .child(Element::new("file").attr("href", href)),
            ),
        )
}
