use crate::model::{ClassificationNode, Sprint, WorkItem, WorkItemType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub value: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct TeamDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct IterationDto {
    pub name: String,
    #[serde(default)]
    pub attributes: IterationAttributes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationAttributes {
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
}

impl IterationDto {
    pub fn into_sprint(self) -> Result<Sprint, String> {
        let (Some(start), Some(finish)) = (&self.attributes.start_date, &self.attributes.finish_date)
        else {
            return Err(format!("Iteration `{}` has no dates", self.name));
        };
        Sprint::parse(&self.name, start, finish)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootNodeDto {
    pub structure_type: Option<String>,
    #[serde(flatten)]
    pub node: ClassificationNode,
}

#[derive(Debug, Deserialize)]
pub struct TeamFieldValuesDto {
    #[serde(default)]
    pub values: Vec<TeamFieldValueDto>,
}

#[derive(Debug, Deserialize)]
pub struct TeamFieldValueDto {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct WiqlRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiqlResponse {
    #[serde(default)]
    pub work_items: Vec<WorkItemRef>,
}

#[derive(Debug, Deserialize)]
pub struct WorkItemRef {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct WorkItemDto {
    pub id: u64,
    pub fields: WorkItemFields,
}

#[derive(Debug, Deserialize)]
pub struct WorkItemFields {
    #[serde(rename = "System.WorkItemType")]
    pub work_item_type: String,
    #[serde(rename = "System.AssignedTo", default)]
    pub assigned_to: Option<IdentityRef>,
    #[serde(rename = "System.AreaPath")]
    pub area_path: String,
    #[serde(rename = "Microsoft.VSTS.Scheduling.StoryPoints", default)]
    pub story_points: Option<f64>,
    #[serde(rename = "System.State")]
    pub state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    pub display_name: String,
}

impl From<WorkItemDto> for WorkItem {
    fn from(dto: WorkItemDto) -> Self {
        let fields = dto.fields;
        WorkItem::new(
            dto.id,
            WorkItemType::from_name(&fields.work_item_type),
            fields.assigned_to.map(|identity| identity.display_name),
            fields.area_path,
            fields.story_points,
            fields.state,
        )
    }
}
