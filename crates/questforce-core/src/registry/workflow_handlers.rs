//! Workflow handler operations for the Registry.

use super::Registry;
use crate::{
    error::{QuestforceError, Result},
    models::{Page, Workflow, WorkflowFilter, UNKNOWN_DURATION},
    params::{CreateWorkflow, Id, ListWorkflows},
    repository::Resource,
};

impl Registry {
    /// Handle listing workflow templates, optionally by category.
    pub fn list_workflows(&self, params: &ListWorkflows) -> Result<Page<Workflow>> {
        let matched = self.workflows.list(&WorkflowFilter::from(params))?;
        Ok(Page::unlimited(matched))
    }

    /// Handle showing a single workflow template.
    pub fn get_workflow(&self, params: &Id) -> Result<Workflow> {
        self.workflows
            .get(&params.id)?
            .ok_or_else(|| QuestforceError::not_found(Workflow::KIND, params.id.clone()))
    }

    /// Handle creating a workflow template.
    ///
    /// Only the number of submitted steps is kept.
    pub fn create_workflow(&self, params: &CreateWorkflow) -> Result<Workflow> {
        let (name, category, steps) = params.validate()?;

        let workflow = Workflow {
            id: self.workflow_ids.issue(),
            name,
            description: params.description.clone().unwrap_or_default(),
            category,
            steps,
            estimated_duration: params
                .estimated_duration
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| UNKNOWN_DURATION.to_string()),
            popularity: 0,
            created_at: self.clock.now(),
        };
        self.workflows.create(workflow)
    }
}
