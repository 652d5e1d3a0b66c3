//! Compiled-in knowledge base: Texas business setup and management.

use atlas_core::models::Entry;

/// Static form of an entry, converted to an owned [`Entry`] at load.
struct BuiltinEntry {
    id: &'static str,
    category: &'static str,
    question: &'static str,
    answer: &'static str,
    sources: &'static [&'static str],
}

impl BuiltinEntry {
    fn to_entry(&self) -> Entry {
        Entry::new(
            self.id,
            self.category,
            self.question,
            self.answer,
            self.sources.iter().map(|s| s.to_string()).collect(),
        )
    }
}

const ENTRIES: &[BuiltinEntry] = &[
    BuiltinEntry {
        id: "llc-texas",
        category: "Business Setup & Management",
        question: "How do I properly set up an LLC in Texas?",
        answer: r#"1. Choose a unique business name (including an LLC designator) and check availability.
2. File a Certificate of Formation – Limited Liability Company (Form 205) with the Texas Secretary of State (“SOS”). The form is designed to satisfy the requirements of the Texas Business Organizations Code (TBOC), Title 3, Chapter 101.
3. Designate a registered agent and registered office in Texas, as required by TBOC (Title 1, Chapter 5).
4. (Strongly recommended though not always legally required) Draft a Company Agreement (operating agreement) to govern internal affairs and structure of the LLC.
5. After filing and approval, maintain statutory records (e.g., membership records) and meet ongoing obligations (such as franchise tax filings with the Texas Comptroller of Public Accounts)."#,
        sources: &[
            "https://www.sos.state.tx.us/corp/forms/205_boc.pdf?utm_source=chatgpt.com",
            "https://www.sos.state.tx.us/corp/businessstructure.shtml?utm_source=chatgpt.com",
        ],
    },
    BuiltinEntry {
        id: "legal-steps-start-business",
        category: "Business Setup & Management",
        question: "What legal steps do I need to take to start my business?",
        answer: r#"At a high level, the legal steps include:
- Decide on the appropriate business entity (LLC, corporation, partnership). The SOS provides guidance distinguishing structures.
- If forming a domestic entity, file the required formation document (e.g., Certificate of Formation) with the Texas SOS for the chosen entity type.
- Ensure you have a registered agent and registered office in Texas (TBOC Title 1, Chapter 5).
- For corporations, adopt bylaws; for LLCs, draft a company/operating agreement.
- Issue evidences of ownership (e.g., membership interest, stock) as required by the entity type.
- Obtain any required federal employer identification number (EIN) from the IRS.
- Comply with state filings, tax registrations (e.g., sales tax, franchise tax), local licenses/permits, and other regulatory obligations."#,
        sources: &[],
    },
    BuiltinEntry {
        id: "business-license-dfw",
        category: "Business Setup & Management",
        question: "Do I need a business license in DFW?",
        answer: r#"TBOC does not govern local business licenses. Whether you need a business license in the Dallas–Fort Worth (DFW) area depends on the city or county jurisdiction and on your industry type (e.g., health services, food, construction). You will need to check:
- The specific city’s (e.g., Dallas or Fort Worth) business license/permit requirements.
- Any state regulatory licensing if your business activity triggers a state-licensing agency (e.g., professional services)."#,
        sources: &[],
    },
    BuiltinEntry {
        id: "management-system-team-organized",
        category: "Business Setup & Management",
        question: "What management system is best for keeping my team organized?",
        answer: r#"There is no single “best” system mandated by law. From a legal perspective under TBOC you must maintain certain records and governance procedures:
- For LLCs: maintain records of members, capital contributions, distributions, and amendments as required by TBOC Title 3, Chapter 101.
- For corporations: maintain minute books, shareholder records, and stock transfer records as required under TBOC Title 2.

In practice, many businesses use project-management or collaboration tools (e.g., Asana, Trello, Slack) together with a secure document repository for legal records."#,
        sources: &[],
    },
    BuiltinEntry {
        id: "stay-compliant-state-federal",
        category: "Business Setup & Management",
        question: "How do I make sure my business stays compliant with state and federal laws?",
        answer: r#"From the state entity-law side (TBOC):
- Keep your entity’s registration current, including the registered agent and registered office (TBOC Title 1, Chapter 5).
- File amendments or changes when required (e.g., change of registered agent, change of entity name).
- Hold any required meetings (corporation) or document decisions (LLC) and keep records.
- Ensure you act within the powers granted to the entity by its governing documents and the law (TBOC Title 1, Chapter 2 covers general powers).

From the federal side:
- Comply with IRS rules for federal taxes (income tax, employment tax, self-employment tax).
- Comply with federal labor laws (e.g., Fair Labor Standards Act), employment tax withholding, and worker-classification rules."#,
        sources: &[],
    },
    BuiltinEntry {
        id: "insurance-needed-start-business",
        category: "Business Setup & Management",
        question: "What insurance do I need when starting a business?",
        answer: r#"TBOC does not specify insurance requirements. Insurance needs depend on your specific operations, risk profile, industry, and jurisdiction. Common insurance types to consider include:
- General liability
- Professional liability (errors & omissions)
- Workers’ compensation (if you have employees and state law requires it)
- Property insurance
- Business interruption insurance

You should also check:
- Whether your industry is regulated and mandates certain coverages.
- Lease or contract obligations that may require insurance.
- Any state or local laws (e.g., workers’ compensation rules) that mandate coverage."#,
        sources: &[],
    },
    BuiltinEntry {
        id: "business-start-checklist",
        category: "Business Setup & Management",
        question: "Can you create a checklist for starting my business the right way?",
        answer: r#"Here is a business start checklist focused on legal formation and compliance (you should add operations, marketing, etc., as needed):

1. Choose a business structure (LLC, corporation, partnership) and understand legal differences.
2. Choose a business name and check availability in Texas (SOS entity name search).
3. Designate a registered agent and registered office in Texas.
4. File the appropriate Certificate of Formation with the Texas SOS (for LLC: Form 205) under TBOC Title 3, Chapter 101.
5. Draft internal governance documents:
   - LLC: Company/Operating Agreement
   - Corporation: Bylaws and any shareholder agreements
6. Issue ownership interests (membership interests or shares) as required by the entity type.
7. Obtain an EIN from the IRS.
8. Register for relevant state taxes (e.g., franchise tax) and sales tax if applicable.
9. Apply for all required local and state licenses and permits.
10. Open a business bank account.
11. Set up bookkeeping and accounting systems.
12. Purchase business insurance appropriate for your operations.
13. Set up payroll (if you will have employees) and related compliance processes.
14. Maintain entity compliance:
   - Keep the registered agent and office up to date
   - File amendments as needed
   - Keep required records and books
   - Follow entity-governance rules under TBOC."#,
        sources: &[],
    },
];

/// Owned copies of the built-in entries, in display order.
pub fn entries() -> Vec<Entry> {
    ENTRIES.iter().map(BuiltinEntry::to_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_entries;

    #[test]
    fn builtin_corpus_is_valid() {
        validate_entries(&entries()).unwrap();
    }

    #[test]
    fn builtin_corpus_has_seven_entries() {
        assert_eq!(entries().len(), 7);
    }

    #[test]
    fn only_the_llc_entry_carries_sources() {
        let with_sources: Vec<String> = entries()
            .into_iter()
            .filter(|e| !e.sources.is_empty())
            .map(|e| e.id)
            .collect();
        assert_eq!(with_sources, vec!["llc-texas".to_string()]);
    }

    #[test]
    fn multi_line_answers_are_kept_verbatim() {
        let checklist = entries()
            .into_iter()
            .find(|e| e.id == "business-start-checklist")
            .unwrap();
        assert!(checklist.answer.starts_with("Here is a business start checklist"));
        assert!(checklist.answer.contains("\n   - LLC: Company/Operating Agreement\n"));
        assert!(checklist.answer.ends_with("Follow entity-governance rules under TBOC."));
    }
}
