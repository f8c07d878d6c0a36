use dto::section::Section;
use std::collections::BTreeSet;

/// Client-side state of the section-choice wizard: the offered sections in
/// server order and the set of section numbers the student has ticked.
/// Lives only in page memory and is rebuilt from scratch on every load.
#[derive(Debug, Default, PartialEq)]
pub struct EnrollmentState {
    sections: Vec<Section>,
    selected: BTreeSet<u32>,
    read_only: bool,
}

/// Everything the selection table needs to paint one row.
#[derive(Debug, PartialEq)]
pub struct SectionRow {
    pub section_no: u32,
    pub subject_code: String,
    pub subject_title: String,
    pub section_name: String,
    pub units: u32,
    pub schedule: String,
    pub status_label: String,
    pub selectable: bool,
    pub selected: bool,
}

/// One line of the confirmation table, with its 1-based position.
#[derive(Debug, PartialEq)]
pub struct ConfirmationRow {
    pub index: usize,
    pub subject_code: String,
    pub subject_title: String,
    pub units: u32,
    pub schedule: String,
}

impl EnrollmentState {
    /// Replace the section list with a freshly fetched offering. The previous
    /// selection is dropped: selected numbers must always reference the
    /// current list.
    pub fn replace_sections(&mut self, sections: Vec<Section>, read_only: bool) {
        self.sections = sections;
        self.selected.clear();
        self.read_only = read_only;
    }

    /// Apply a checkbox toggle. Numbers that don't reference a current
    /// section are ignored.
    pub fn toggle(&mut self, section_no: u32, checked: bool) {
        if !self
            .sections
            .iter()
            .any(|section| *section.section_no() == section_no)
        {
            return;
        }
        if checked {
            self.selected.insert(section_no);
        } else {
            self.selected.remove(&section_no);
        }
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }

    /// Sum of units over the selected sections.
    pub fn total_units(&self) -> u32 {
        self.selected_sections()
            .iter()
            .map(|section| *section.units())
            .sum()
    }

    /// The selected sections in their original server order.
    fn selected_sections(&self) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|section| self.selected.contains(section.section_no()))
            .collect()
    }

    pub fn section_rows(&self) -> Vec<SectionRow> {
        self.sections
            .iter()
            .map(|section| SectionRow {
                section_no: *section.section_no(),
                subject_code: section.subject_code().clone(),
                subject_title: section.subject_title().clone(),
                section_name: section.section_name().clone(),
                units: *section.units(),
                schedule: section.schedule().clone(),
                status_label: section.status().to_string(),
                selectable: section.status().is_open() && !self.read_only,
                selected: self.selected.contains(section.section_no()),
            })
            .collect()
    }

    pub fn confirmation_rows(&self) -> Vec<ConfirmationRow> {
        self.selected_sections()
            .iter()
            .enumerate()
            .map(|(index, section)| ConfirmationRow {
                index: index + 1,
                subject_code: section.subject_code().clone(),
                subject_title: section.subject_title().clone(),
                units: *section.units(),
                schedule: section.schedule().clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::enrollment::state::EnrollmentState;
    use dto::section::Section;
    use dto::section_status::SectionStatus;

    fn section(section_no: u32, units: u32, status: SectionStatus) -> Section {
        Section::new(
            section_no,
            format!("BSCS 1-{section_no}"),
            format!("CS{section_no}"),
            format!("Subject {section_no}"),
            units,
            "MWF 08:00-09:00".to_owned(),
            status,
        )
    }

    fn state_with_sections(sections: Vec<Section>) -> EnrollmentState {
        let mut state = EnrollmentState::default();
        state.replace_sections(sections, false);
        state
    }

    // region toggle & total units
    #[test]
    fn should_sum_units_over_selected_sections() {
        let mut state = state_with_sections(vec![
            section(1, 3, SectionStatus::Open),
            section(2, 4, SectionStatus::Open),
            section(3, 2, SectionStatus::Open),
        ]);

        state.toggle(1, true);
        state.toggle(3, true);

        assert_eq!(5, state.total_units());
        assert_eq!(vec![1, 3], state.selected_ids());
    }

    #[test]
    fn should_ignore_toggle_for_unknown_section() {
        let mut state = state_with_sections(vec![section(1, 3, SectionStatus::Open)]);

        state.toggle(99, true);

        assert!(!state.has_selection());
        assert_eq!(0, state.total_units());
    }

    #[test]
    fn should_return_to_prior_state_when_toggled_on_then_off() {
        let mut state = state_with_sections(vec![
            section(1, 3, SectionStatus::Open),
            section(2, 4, SectionStatus::Open),
        ]);
        state.toggle(1, true);
        let prior_ids = state.selected_ids();
        let prior_total = state.total_units();

        state.toggle(2, true);
        state.toggle(2, false);

        assert_eq!(prior_ids, state.selected_ids());
        assert_eq!(prior_total, state.total_units());
    }

    #[test]
    fn should_drop_selection_when_sections_are_replaced() {
        let mut state = state_with_sections(vec![section(1, 3, SectionStatus::Open)]);
        state.toggle(1, true);

        state.replace_sections(vec![section(2, 4, SectionStatus::Open)], false);

        assert!(!state.has_selection());
        assert_eq!(0, state.total_units());
    }
    // endregion

    // region section rows
    #[test]
    fn should_only_mark_open_sections_selectable() {
        let mut state = state_with_sections(vec![
            section(1, 3, SectionStatus::Open),
            section(2, 4, SectionStatus::Full),
        ]);

        let rows = state.section_rows();
        assert!(rows[0].selectable);
        assert!(!rows[1].selectable);

        state.toggle(1, true);
        assert_eq!(3, state.total_units());
    }

    #[test]
    fn should_mark_nothing_selectable_when_read_only() {
        let mut state = EnrollmentState::default();
        state.replace_sections(
            vec![
                section(1, 3, SectionStatus::Open),
                section(2, 4, SectionStatus::Open),
            ],
            true,
        );

        assert!(state.section_rows().iter().all(|row| !row.selectable));
    }

    #[test]
    fn should_keep_server_order_in_rows() {
        let state = state_with_sections(vec![
            section(7, 3, SectionStatus::Open),
            section(2, 4, SectionStatus::Open),
            section(5, 2, SectionStatus::Open),
        ]);

        let order = state
            .section_rows()
            .iter()
            .map(|row| row.section_no)
            .collect::<Vec<_>>();
        assert_eq!(vec![7, 2, 5], order);
    }
    // endregion

    // region confirmation rows
    #[test]
    fn should_number_confirmation_rows_in_server_order() {
        let mut state = state_with_sections(vec![
            section(7, 3, SectionStatus::Open),
            section(2, 4, SectionStatus::Open),
            section(5, 2, SectionStatus::Open),
        ]);
        state.toggle(5, true);
        state.toggle(7, true);

        let rows = state.confirmation_rows();

        assert_eq!(2, rows.len());
        assert_eq!((1, "CS7".to_owned()), (rows[0].index, rows[0].subject_code.clone()));
        assert_eq!((2, "CS5".to_owned()), (rows[1].index, rows[1].subject_code.clone()));
    }

    #[test]
    fn should_render_no_confirmation_rows_without_selection() {
        let state = state_with_sections(vec![section(1, 3, SectionStatus::Open)]);

        assert!(state.confirmation_rows().is_empty());
        assert!(!state.has_selection());
    }
    // endregion
}
