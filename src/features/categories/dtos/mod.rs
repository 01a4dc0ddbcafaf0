pub mod category_dto;

pub use category_dto::{
    CategoryChildDto, CategoryHierarchyDto, CategoryResponseDto, CreateCategoryDto,
    TopLevelCategoryDto, UpdateCategoryDto,
};
