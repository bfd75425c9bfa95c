//! Quest handler operations for the Registry.

use log::debug;

use super::Registry;
use crate::{
    error::{QuestforceError, Result},
    models::{
        Deleted, Page, Quest, QuestFilter, QuestProgress, QuestStatus, DEFAULT_ESTIMATED_TIME,
        DEFAULT_XP_REWARD,
    },
    params::{CreateQuest, Id, ListQuests, UpdateQuest},
    repository::Resource,
};

impl Registry {
    /// Handle listing quests filtered by status and/or difficulty.
    pub fn list_quests(&self, params: &ListQuests) -> Result<Page<Quest>> {
        let filter = QuestFilter::from(params);
        let matched = self.quests.list(&filter)?;
        debug!("Listed {} quests matching {:?}", matched.len(), filter);
        Ok(Page::unlimited(matched))
    }

    /// Handle showing a single quest with its task checklist.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::NotFound` when no quest has the given id.
    pub fn get_quest(&self, params: &Id) -> Result<Quest> {
        self.quests
            .get(&params.id)?
            .ok_or_else(|| QuestforceError::not_found(Quest::KIND, params.id.clone()))
    }

    /// Handle creating a quest.
    ///
    /// New quests are pending with no progress. The XP reward, time estimate
    /// and assigned agents fall back to defaults when not supplied.
    pub fn create_quest(&self, params: &CreateQuest) -> Result<Quest> {
        let (title, description, difficulty) = params.validate()?;

        let quest = Quest {
            id: self.quest_ids.issue(),
            title,
            description,
            status: QuestStatus::Pending,
            difficulty,
            xp_reward: params.xp_reward.unwrap_or(DEFAULT_XP_REWARD),
            estimated_time: params
                .estimated_time
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_ESTIMATED_TIME.to_string()),
            assigned_agents: params.assigned_agents.clone().unwrap_or_default(),
            progress: 0.0,
            created_at: self.clock.now(),
            completed_at: None,
            tasks: Vec::new(),
        };
        debug!("Created quest {} ({})", quest.id, quest.title);
        self.quests.create(quest)
    }

    /// Handle updating a quest's status, progress and assignment.
    ///
    /// Progress is echoed exactly as given. Unsupplied fields are not carried
    /// over from any stored quest: status defaults to active, progress to 0
    /// and the assignment to nobody.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::InvalidInput` when the status is unknown or
    /// the progress lies outside [0, 100].
    pub fn update_quest(&self, params: &UpdateQuest) -> Result<QuestProgress> {
        let (status, progress) = params.validate()?;

        let change = QuestProgress {
            id: params.id.clone(),
            status: status.unwrap_or(QuestStatus::Active),
            progress: progress.unwrap_or(0.0),
            assigned_agents: params.assigned_agents.clone().unwrap_or_default(),
            updated_at: self.clock.now(),
        };
        self.quests.update(change)
    }

    /// Handle deleting a quest. Always succeeds.
    pub fn delete_quest(&self, params: &Id) -> Result<Deleted> {
        self.quests.delete(&params.id)?;
        Ok(Deleted::new(Quest::KIND, params.id.clone()))
    }
}
