//! Prompt templates for the analysis modes
//!
//! Opaque string templates with an explicit expected output layout. The
//! section labels embedded here are the same ones the response parser
//! scans for; changing a label means changing the corresponding pattern
//! table.

/// Prompt templates for each analysis mode
pub struct PromptTemplates;

impl PromptTemplates {
    /// Text fact-checking analysis, optionally grounded in live search.
    pub fn text_analysis(content: &str) -> String {
        format!(
            "As an expert fact-checker, analyze this content:\n\
             \n\
             CONTENT: {content}\n\
             \n\
             Perform comprehensive analysis:\n\
             \n\
             1. KEYWORD AND TOPIC EXTRACTION:\n\
                - Extract main topics, entities, and claims\n\
                - Identify key facts that need verification\n\
             \n\
             2. CREDIBILITY ASSESSMENT:\n\
                - Cross-reference claims with reliable sources\n\
                - Check for bias, manipulation, or misleading language\n\
             \n\
             3. EVIDENCE COMPILATION:\n\
                - Gather supporting evidence from credible sources\n\
                - Identify contradicting information\n\
             \n\
             4. CRITICAL REASONING:\n\
                - Provide a logical reasoning chain for the assessment\n\
                - Explain why content is authentic, suspicious, or fake\n\
             \n\
             Provide analysis in this exact format:\n\
             \n\
             AUTHENTICITY SCORE: [0-100]\n\
             CLASSIFICATION: [AUTHENTIC/SUSPICIOUS/FAKE]\n\
             CONFIDENCE LEVEL: [HIGH/MEDIUM/LOW]\n\
             \n\
             KEY_TOPICS_EXTRACTED:\n\
             - [Topic 1]\n\
             - [Topic 2]\n\
             \n\
             FACT_CHECK_RESULTS:\n\
             - [Verified fact with source]\n\
             - [Contradicted claim with evidence]\n\
             \n\
             SUPPORTING_EVIDENCE:\n\
             - [Evidence with citation]\n\
             \n\
             RED_FLAGS_DETECTED:\n\
             - [Red flag with explanation]\n\
             \n\
             REASONING_CHAIN:\n\
             [Step-by-step logical reasoning for the assessment]\n\
             \n\
             RECOMMENDATION: [Detailed actionable recommendation]"
        )
    }

    /// Reverse-image-search assessment; the image rides alongside as an
    /// inline part.
    pub fn reverse_search(context: &str) -> String {
        format!(
            "As an expert in image verification and reverse search analysis, \
             examine this image thoroughly.\n\
             \n\
             Context: {context}\n\
             \n\
             Assess whether the image appears original or recycled, look for \
             signs of manipulation or synthetic generation, and evaluate \
             temporal and geographical consistency with the claimed context.\n\
             \n\
             Provide analysis in this format:\n\
             \n\
             REVERSE SEARCH ASSESSMENT: [Analysis of likely matches and sources]\n\
             AUTHENTICITY SCORE: [0-100]\n\
             MANIPULATION DETECTED: [YES/NO/UNCERTAIN]\n\
             \n\
             VISUAL EVIDENCE:\n\
             - [Key finding 1]\n\
             - [Key finding 2]\n\
             \n\
             RED FLAGS:\n\
             - [Flag if any]\n\
             \n\
             VERIFICATION:\n\
             - [Suggested verification step]\n\
             \n\
             RECOMMENDATION: [Recommendation for further verification]"
        )
    }

    /// OCR extraction and topic analysis for an attached image.
    pub fn ocr_extraction() -> String {
        "As an OCR and NLP expert, extract and analyze all text from this image.\n\
         \n\
         Tasks:\n\
         1. Extract ALL visible text accurately (headlines, captions, body text)\n\
         2. Identify key topics, entities, and themes\n\
         3. Suggest search queries for verification\n\
         \n\
         Provide analysis in this format:\n\
         \n\
         EXTRACTED_TEXT: [All visible text from the image]\n\
         \n\
         KEY_TOPICS_EXTRACTED:\n\
         - [Topic 1]\n\
         - [Topic 2]\n\
         \n\
         ENTITIES_DETECTED:\n\
         - [Person/Organization/Location]\n\
         \n\
         SEARCH_QUERIES:\n\
         - [Query for fact-checking]"
            .to_string()
    }

    /// Final image-forensics pass, embedding the raw intermediate results.
    pub fn image_forensics(context: &str, reverse_analysis: &str, ocr_analysis: &str) -> String {
        format!(
            "As an advanced image forensics expert, provide a comprehensive \
             image authenticity analysis.\n\
             \n\
             Context: {context}\n\
             \n\
             Previous Analysis Results:\n\
             REVERSE SEARCH: {reverse_analysis}\n\
             OCR EXTRACTION: {ocr_analysis}\n\
             \n\
             Perform final comprehensive analysis:\n\
             \n\
             IMAGE AUTHENTICITY SCORE: [0-100]\n\
             MANIPULATION DETECTED: [YES/NO/UNCERTAIN]\n\
             CONFIDENCE LEVEL: [HIGH/MEDIUM/LOW]\n\
             \n\
             TECHNICAL_ANALYSIS:\n\
             - [Technical finding]\n\
             - [Metadata/compression analysis]\n\
             \n\
             FINAL_ASSESSMENT:\n\
             [Comprehensive reasoning combining all analyses]\n\
             \n\
             RECOMMENDATION: [Specific actionable guidance]"
        )
    }

    /// Combined text+image assessment over all gathered evidence.
    pub fn multimodal(content: &str, image_analysis: &str, extracted_text: &str) -> String {
        format!(
            "As a multimodal misinformation expert, perform the final \
             authenticity assessment combining all available evidence.\n\
             \n\
             TEXT CONTENT: {content}\n\
             IMAGE ANALYSIS: {image_analysis}\n\
             EXTRACTED TEXT: {extracted_text}\n\
             \n\
             Provide analysis in this exact format:\n\
             \n\
             OVERALL AUTHENTICITY SCORE: [0-100]\n\
             FINAL CLASSIFICATION: [AUTHENTIC/SUSPICIOUS/FAKE]\n\
             CONFIDENCE LEVEL: [HIGH/MEDIUM/LOW]\n\
             CROSS_MODAL_CONSISTENCY: [CONSISTENT/PARTIALLY_CONSISTENT/INCONSISTENT]\n\
             \n\
             TEXT_ANALYSIS_SUMMARY:\n\
             - [Key text finding]\n\
             \n\
             IMAGE_ANALYSIS_SUMMARY:\n\
             - [Key image finding]\n\
             \n\
             EVIDENCE_COMPILATION:\n\
             - [Supporting evidence with source]\n\
             \n\
             RED_FLAGS_DETECTED:\n\
             - [Red flag with explanation]\n\
             \n\
             COMPREHENSIVE_REASONING:\n\
             [Detailed step-by-step reasoning combining all analyses]\n\
             \n\
             FINAL_RECOMMENDATION:\n\
             [Comprehensive actionable recommendation with risk assessment]"
        )
    }
}
