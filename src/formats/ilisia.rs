//! Ilisia: apartment building renovation; units instead of plots.

use super::{Columns, FormatSpec};
use crate::plots::ProjectSource;
use crate::rules::Cond::*;
use crate::rules::{Patch, Rule};

pub const UNITS: &[&str] = &[
    "A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2", "PH", "ΙΣΟΓΕΙΟ", "ΥΠΟΓΕΙΟ",
];

pub const BUILDING: &str = "Ilisia Building";

pub static SPEC: FormatSpec = FormatSpec {
    key: "ilisia",
    name: "Ilisia",
    columns: Columns {
        date: "Ημερομηνία Συναλλαγής",
        description: "Αιτιολογία",
        amount: "Ποσό",
    },
    project_header: "Plot",
    extra_columns: &["Balance"],
    projects: ProjectSource::PlotCodes {
        codes: UNITS,
        fallback: BUILDING,
    },
    rules: RULES,
};

const RULES: &[Rule] = &[
    Rule {
        name: "bank-fee",
        when: &[Any(&["ΠΡΟΜΗΘΕΙΑ", "ΕΞΟΔΑ", "COMMISSION"]), AtMost(5.0)],
        set: Patch::new().category("Bank").supplier("Bank").label("Bank fees"),
    },
    Rule {
        name: "food",
        when: &[Any(&["FOOD", "CAFE", "COFFEE", "RESTAURANT", "ΚΑΦΕ", "BAKERY", "ΦΟΥΡΝΟΣ"])],
        set: Patch::new()
            .category("Project management")
            .supplier("General")
            .label("F&B"),
    },
    Rule {
        name: "mikel",
        when: &[Any(&["MIKEL"])],
        set: Patch::new().supplier("Mikel").label("Mikel Coffee"),
    },
    Rule {
        name: "taxi",
        when: &[Any(&["UBER", "TAXI", "ΤΑΞΙ", "FREENOW", "FREE NOW"])],
        set: Patch::new()
            .category("Project management")
            .supplier("Transportation")
            .label("Athens Taxi"),
    },
    Rule {
        name: "demolition",
        when: &[Any(&["ΚΑΘΑΙΡΕΣ", "DEMOLITION", "ΑΠΟΞΗΛΩΣ", "ΜΠΑΖΑ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Demolition")
            .label("Demolition & debris removal"),
    },
    Rule {
        name: "building-materials",
        when: &[Any(&["ΟΙΚΟΔΟΜΙΚΑ", "BUILDING MATERIALS", "PRAKTIKER", "LEROY MERLIN"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Building materials")
            .label("Building materials"),
    },
    Rule {
        name: "contractor",
        when: &[Any(&["ΕΡΓΟΛΑΒ", "CONTRACTOR", "ΑΝΑΔΟΧ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Contractor")
            .label("Contractor works"),
    },
    Rule {
        name: "electrician",
        when: &[Any(&["ELECTRICIAN", "ΗΛΕΚΤΡΟΛΟΓ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Electrician")
            .label("Electrical works"),
    },
    Rule {
        name: "plumber",
        when: &[Any(&["PLUMBER", "ΥΔΡΑΥΛΙΚ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Plumber")
            .label("Plumbing works"),
    },
    Rule {
        name: "painting",
        when: &[Any(&["ΒΑΦΕΣ", "ΕΛΑΙΟΧΡΩΜ", "PAINT"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Painter")
            .label("Painting"),
    },
    Rule {
        name: "windows",
        when: &[Any(&["ΑΛΟΥΜΙΝ", "ALUMIN", "ΚΟΥΦΩΜΑΤ"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Aluminium frames")
            .label("Windows & frames"),
    },
    Rule {
        name: "elevator",
        when: &[Any(&["ΑΝΕΛΚΥΣΤΗΡ", "ELEVATOR", "KONE", "SCHINDLER"])],
        set: Patch::new()
            .expense("Hard Cost")
            .category("Construction")
            .supplier("Elevator")
            .label("Elevator"),
    },
    Rule {
        name: "common-charges",
        when: &[Any(&["ΚΟΙΝΟΧΡΗΣΤΑ", "COMMON CHARGES"])],
        set: Patch::new()
            .category("Building")
            .supplier("Building manager")
            .label("Common charges"),
    },
    Rule {
        name: "telecom",
        when: &[Any(&["COSMOTE", "VODAFONE", "NOVA TELECOM", "WIND HELLAS"])],
        set: Patch::new()
            .category("Utilities")
            .supplier("Telecom")
            .label("Phone & internet"),
    },
    Rule {
        name: "electricity",
        when: &[Any(&["ΔΕΗ", "PPC", "ΗΡΩΝ ΕΝΕΡΓ", "HERON ENERGY"])],
        set: Patch::new()
            .category("Utilities")
            .supplier("Electricity")
            .label("Electricity"),
    },
    Rule {
        name: "water",
        when: &[Any(&["ΕΥΔΑΠ", "EYDAP"])],
        set: Patch::new().category("Utilities").supplier("EYDAP").label("Water"),
    },
    Rule {
        name: "accounting",
        when: &[
            Any(&["ΛΟΓΙΣΤ", "ACCOUNTING", "ACCOUNTANT"]),
            Without(&["ARCHITECT", "ΑΡΧΙΤΕΚΤ"]),
        ],
        set: Patch::new()
            .category("Accounting")
            .supplier("Accountant")
            .label("Accounting services"),
    },
    Rule {
        name: "architect",
        when: &[Any(&["ARCHITECT", "ΑΡΧΙΤΕΚΤ"])],
        set: Patch::new()
            .category("Design")
            .supplier("Architect")
            .label("Architectural services"),
    },
    Rule {
        name: "engineer",
        when: &[Any(&["ENGINEER", "ΜΗΧΑΝΙΚ"])],
        set: Patch::new()
            .category("Design")
            .supplier("Engineer")
            .label("Engineering studies"),
    },
    Rule {
        name: "legal",
        when: &[Any(&["LAWYER", "LEGAL", "ΔΙΚΗΓΟΡ"])],
        set: Patch::new().category("Legal").supplier("Lawyer").label("Legal fees"),
    },
    Rule {
        name: "taxes",
        when: &[Any(&["ΑΑΔΕ", "AADE", "ΦΠΑ", "ΕΝΦΙΑ", "TAX OFFICE", "Δ.Ο.Υ."])],
        set: Patch::new()
            .category("Taxes & Permits")
            .supplier("Tax authority")
            .label("Taxes"),
    },
    Rule {
        name: "building-permit",
        when: &[Any(&["ΑΔΕΙΑ ΔΟΜΗΣΗΣ", "ΑΔΕΙΑ ΜΙΚΡΗΣ ΚΛΙΜΑΚΑΣ", "BUILDING PERMIT", "ΥΔΟΜ"])],
        set: Patch::new()
            .category("Taxes & Permits")
            .supplier("Building authority")
            .label("Building permit"),
    },
    Rule {
        name: "municipality",
        when: &[Any(&["ΔΗΜΟΣ ΑΘΗΝΑΙΩΝ", "CITY OF ATHENS", "DIMOS ATHINAION"])],
        set: Patch::new()
            .category("Taxes & Permits")
            .supplier("City of Athens")
            .label("Municipal fees")
            .plot(BUILDING),
    },
    Rule {
        name: "rent-received",
        when: &[Any(&["ΜΙΣΘΩΜΑ", "ΕΝΟΙΚΙΟ", "RENT"]), Income],
        set: Patch::new()
            .expense("Operation Income")
            .category("Rentals")
            .supplier("Tenant")
            .label("Rent received"),
    },
    Rule {
        name: "tenant-deposit",
        when: &[Any(&["ΕΓΓΥΗΣΗ", "GUARANTEE"]), Income],
        set: Patch::new()
            .expense("Operation Income")
            .category("Rentals")
            .supplier("Tenant")
            .label("Tenant deposit"),
    },
    Rule {
        name: "management-fee",
        when: &[Amount(-2480.0)],
        set: Patch::new()
            .category("Management Fee")
            .supplier("Aiolos Management")
            .label("Monthly management fee")
            .plot(BUILDING),
    },
];
