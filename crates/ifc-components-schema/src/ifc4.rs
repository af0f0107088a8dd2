// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curated IFC4 ancestry table
//!
//! Covers the rooted object tree (spatial structure, building and
//! distribution elements), relationships, property definitions and type
//! objects - the portion of the IFC4 schema that reaches the component
//! pipeline. The table is `(child, parent)` pairs; roots appear only on the
//! parent side.

use crate::hierarchy::TypeHierarchy;

/// Direct-parent pairs for the curated IFC4 subset
pub const IFC4_PARENTS: &[(&str, &str)] = &[
    // Root branch
    ("IfcObjectDefinition", "IfcRoot"),
    ("IfcPropertyDefinition", "IfcRoot"),
    ("IfcRelationship", "IfcRoot"),
    ("IfcObject", "IfcObjectDefinition"),
    ("IfcTypeObject", "IfcObjectDefinition"),
    ("IfcContext", "IfcObjectDefinition"),
    ("IfcProject", "IfcContext"),
    // Objects
    ("IfcActor", "IfcObject"),
    ("IfcControl", "IfcObject"),
    ("IfcGroup", "IfcObject"),
    ("IfcProcess", "IfcObject"),
    ("IfcProduct", "IfcObject"),
    ("IfcResource", "IfcObject"),
    ("IfcSystem", "IfcGroup"),
    ("IfcZone", "IfcGroup"),
    // Products
    ("IfcAnnotation", "IfcProduct"),
    ("IfcElement", "IfcProduct"),
    ("IfcGrid", "IfcProduct"),
    ("IfcPort", "IfcProduct"),
    ("IfcProxy", "IfcProduct"),
    ("IfcSpatialElement", "IfcProduct"),
    // Spatial structure
    ("IfcSpatialStructureElement", "IfcSpatialElement"),
    ("IfcSpatialZone", "IfcSpatialElement"),
    ("IfcExternalSpatialStructureElement", "IfcSpatialElement"),
    ("IfcSite", "IfcSpatialStructureElement"),
    ("IfcBuilding", "IfcSpatialStructureElement"),
    ("IfcBuildingStorey", "IfcSpatialStructureElement"),
    ("IfcSpace", "IfcSpatialStructureElement"),
    // Element families
    ("IfcBuildingElement", "IfcElement"),
    ("IfcCivilElement", "IfcElement"),
    ("IfcDistributionElement", "IfcElement"),
    ("IfcElementAssembly", "IfcElement"),
    ("IfcElementComponent", "IfcElement"),
    ("IfcFeatureElement", "IfcElement"),
    ("IfcFurnishingElement", "IfcElement"),
    ("IfcGeographicElement", "IfcElement"),
    ("IfcTransportElement", "IfcElement"),
    ("IfcVirtualElement", "IfcElement"),
    // Building elements
    ("IfcBeam", "IfcBuildingElement"),
    ("IfcBuildingElementProxy", "IfcBuildingElement"),
    ("IfcChimney", "IfcBuildingElement"),
    ("IfcColumn", "IfcBuildingElement"),
    ("IfcCovering", "IfcBuildingElement"),
    ("IfcCurtainWall", "IfcBuildingElement"),
    ("IfcDoor", "IfcBuildingElement"),
    ("IfcFooting", "IfcBuildingElement"),
    ("IfcMember", "IfcBuildingElement"),
    ("IfcPile", "IfcBuildingElement"),
    ("IfcPlate", "IfcBuildingElement"),
    ("IfcRailing", "IfcBuildingElement"),
    ("IfcRamp", "IfcBuildingElement"),
    ("IfcRampFlight", "IfcBuildingElement"),
    ("IfcRoof", "IfcBuildingElement"),
    ("IfcShadingDevice", "IfcBuildingElement"),
    ("IfcSlab", "IfcBuildingElement"),
    ("IfcStair", "IfcBuildingElement"),
    ("IfcStairFlight", "IfcBuildingElement"),
    ("IfcWall", "IfcBuildingElement"),
    ("IfcWindow", "IfcBuildingElement"),
    ("IfcBeamStandardCase", "IfcBeam"),
    ("IfcColumnStandardCase", "IfcColumn"),
    ("IfcDoorStandardCase", "IfcDoor"),
    ("IfcMemberStandardCase", "IfcMember"),
    ("IfcPlateStandardCase", "IfcPlate"),
    ("IfcSlabElementedCase", "IfcSlab"),
    ("IfcSlabStandardCase", "IfcSlab"),
    ("IfcWallElementedCase", "IfcWall"),
    ("IfcWallStandardCase", "IfcWall"),
    ("IfcWindowStandardCase", "IfcWindow"),
    // Features and openings
    ("IfcFeatureElementAddition", "IfcFeatureElement"),
    ("IfcFeatureElementSubtraction", "IfcFeatureElement"),
    ("IfcSurfaceFeature", "IfcFeatureElement"),
    ("IfcOpeningElement", "IfcFeatureElementSubtraction"),
    ("IfcVoidingFeature", "IfcFeatureElementSubtraction"),
    ("IfcOpeningStandardCase", "IfcOpeningElement"),
    ("IfcProjectionElement", "IfcFeatureElementAddition"),
    // Distribution elements
    ("IfcDistributionControlElement", "IfcDistributionElement"),
    ("IfcDistributionFlowElement", "IfcDistributionElement"),
    ("IfcDistributionChamberElement", "IfcDistributionFlowElement"),
    ("IfcEnergyConversionDevice", "IfcDistributionFlowElement"),
    ("IfcFlowController", "IfcDistributionFlowElement"),
    ("IfcFlowFitting", "IfcDistributionFlowElement"),
    ("IfcFlowMovingDevice", "IfcDistributionFlowElement"),
    ("IfcFlowSegment", "IfcDistributionFlowElement"),
    ("IfcFlowStorageDevice", "IfcDistributionFlowElement"),
    ("IfcFlowTerminal", "IfcDistributionFlowElement"),
    ("IfcFlowTreatmentDevice", "IfcDistributionFlowElement"),
    // Furnishing
    ("IfcFurniture", "IfcFurnishingElement"),
    ("IfcSystemFurnitureElement", "IfcFurnishingElement"),
    // Relationships
    ("IfcRelAssigns", "IfcRelationship"),
    ("IfcRelAssociates", "IfcRelationship"),
    ("IfcRelConnects", "IfcRelationship"),
    ("IfcRelDeclares", "IfcRelationship"),
    ("IfcRelDecomposes", "IfcRelationship"),
    ("IfcRelDefines", "IfcRelationship"),
    ("IfcRelAggregates", "IfcRelDecomposes"),
    ("IfcRelNests", "IfcRelDecomposes"),
    ("IfcRelProjectsElement", "IfcRelDecomposes"),
    ("IfcRelVoidsElement", "IfcRelDecomposes"),
    ("IfcRelContainedInSpatialStructure", "IfcRelConnects"),
    ("IfcRelConnectsElements", "IfcRelConnects"),
    ("IfcRelConnectsPathElements", "IfcRelConnectsElements"),
    ("IfcRelFillsElement", "IfcRelConnects"),
    ("IfcRelReferencedInSpatialStructure", "IfcRelConnects"),
    ("IfcRelSpaceBoundary", "IfcRelConnects"),
    ("IfcRelDefinesByObject", "IfcRelDefines"),
    ("IfcRelDefinesByProperties", "IfcRelDefines"),
    ("IfcRelDefinesByTemplate", "IfcRelDefines"),
    ("IfcRelDefinesByType", "IfcRelDefines"),
    ("IfcRelAssociatesClassification", "IfcRelAssociates"),
    ("IfcRelAssociatesDocument", "IfcRelAssociates"),
    ("IfcRelAssociatesLibrary", "IfcRelAssociates"),
    ("IfcRelAssociatesMaterial", "IfcRelAssociates"),
    ("IfcRelAssignsToGroup", "IfcRelAssigns"),
    ("IfcRelAssignsToProcess", "IfcRelAssigns"),
    ("IfcRelAssignsToProduct", "IfcRelAssigns"),
    ("IfcRelAssignsToResource", "IfcRelAssigns"),
    // Property definitions
    ("IfcPropertySetDefinition", "IfcPropertyDefinition"),
    ("IfcPropertyTemplateDefinition", "IfcPropertyDefinition"),
    ("IfcPropertySet", "IfcPropertySetDefinition"),
    ("IfcQuantitySet", "IfcPropertySetDefinition"),
    ("IfcElementQuantity", "IfcQuantitySet"),
    // Type objects
    ("IfcTypeProduct", "IfcTypeObject"),
    ("IfcElementType", "IfcTypeProduct"),
    ("IfcSpatialElementType", "IfcTypeProduct"),
    ("IfcBuildingElementType", "IfcElementType"),
    ("IfcDistributionElementType", "IfcElementType"),
    ("IfcFurnishingElementType", "IfcElementType"),
    ("IfcTransportElementType", "IfcElementType"),
    ("IfcBeamType", "IfcBuildingElementType"),
    ("IfcBuildingElementProxyType", "IfcBuildingElementType"),
    ("IfcColumnType", "IfcBuildingElementType"),
    ("IfcCoveringType", "IfcBuildingElementType"),
    ("IfcCurtainWallType", "IfcBuildingElementType"),
    ("IfcDoorType", "IfcBuildingElementType"),
    ("IfcFootingType", "IfcBuildingElementType"),
    ("IfcMemberType", "IfcBuildingElementType"),
    ("IfcPileType", "IfcBuildingElementType"),
    ("IfcPlateType", "IfcBuildingElementType"),
    ("IfcRailingType", "IfcBuildingElementType"),
    ("IfcRampType", "IfcBuildingElementType"),
    ("IfcRampFlightType", "IfcBuildingElementType"),
    ("IfcRoofType", "IfcBuildingElementType"),
    ("IfcSlabType", "IfcBuildingElementType"),
    ("IfcStairType", "IfcBuildingElementType"),
    ("IfcStairFlightType", "IfcBuildingElementType"),
    ("IfcWallType", "IfcBuildingElementType"),
    ("IfcWindowType", "IfcBuildingElementType"),
];

impl TypeHierarchy {
    /// Build the hierarchy from the curated IFC4 table
    pub fn ifc4() -> Self {
        Self::from_pairs(IFC4_PARENTS.iter().copied())
    }
}
